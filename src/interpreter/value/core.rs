use std::fmt;

use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64_checked,
};

/// Text value rendered as a line break when displayed (`$` in source).
pub const NEWLINE_SENTINEL: &str = "$";
/// Text value rendered as a bare `#` when displayed.
pub const HASH_SENTINEL: &str = "[#]";

/// Display word for the boolean `true`.
pub const TRUE_WORD: &str = "OO";
/// Display word for the boolean `false`.
pub const FALSE_WORD: &str = "DILI";
/// Display word for a missing value.
pub const NULL_WORD: &str = "WALA";

/// Represents a runtime value in the interpreter.
///
/// Values carry no declared type of their own. The type a variable was
/// declared with lives in its slot as [`DeclaredType`] and is not re-checked
/// when the variable is assigned.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value.
    Null,
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision decimal.
    Decimal(f64),
    /// A single character, from `'a'` or an escape such as `[#]`.
    Character(char),
    /// A double-quoted text literal or the result of `&`.
    Text(String),
    /// `"OO"` or `"DILI"`.
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Decimal(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Character(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl Value {
    /// Returns the name of the value's kind, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Integer(_) => "integer",
            Self::Decimal(_) => "decimal",
            Self::Character(_) => "character",
            Self::Text(_) => "text",
            Self::Bool(_) => "boolean",
        }
    }

    /// Converts the value to a boolean by the truthiness rule.
    ///
    /// Null is false, booleans are themselves, numbers are true when nonzero
    /// and characters or text are true when non-empty. The null character
    /// counts as empty.
    ///
    /// # Example
    /// ```
    /// use sugod::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(3).is_truthy());
    /// assert!(!Value::Decimal(0.0).is_truthy());
    /// assert!(!Value::Text(String::new()).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Integer(n) => *n != 0,
            Self::Decimal(d) => *d != 0.0,
            Self::Character(c) => *c != '\0',
            Self::Text(s) => !s.is_empty(),
        }
    }

    /// Returns `true` for integers and decimals.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Decimal(_))
    }

    /// Converts a numeric value to `f64`.
    ///
    /// Integers too large to be represented exactly are rejected instead of
    /// being rounded.
    ///
    /// # Example
    /// ```
    /// use sugod::{ast::Position, interpreter::value::core::Value};
    ///
    /// let pos = Position::new(1, 1);
    /// assert_eq!(Value::Integer(10).as_decimal(pos).unwrap(), 10.0);
    /// assert!(Value::Character('a').as_decimal(pos).is_err());
    /// ```
    pub fn as_decimal(&self, pos: Position) -> EvalResult<f64> {
        match self {
            Self::Decimal(d) => Ok(*d),
            Self::Integer(n) => i64_to_f64_checked(*n, RuntimeError::PrecisionLoss { pos }),
            _ => Err(RuntimeError::ExpectedNumber { found: self.type_name(),
                                                    pos }),
        }
    }

    /// Returns the character or text content for ordering comparisons.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Character(c) => Some(c.to_string()),
            Self::Text(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "{NULL_WORD}"),
            Self::Bool(true) => write!(f, "{TRUE_WORD}"),
            Self::Bool(false) => write!(f, "{FALSE_WORD}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(d) if d.is_finite() && d.fract() == 0.0 => write!(f, "{d:.1}"),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Character(c) => write!(f, "{c}"),
            Self::Text(s) if s == NEWLINE_SENTINEL => writeln!(f),
            Self::Text(s) if s == HASH_SENTINEL => write!(f, "#"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// The type a variable is declared with.
///
/// The declared type decides the zero value of an uninitialized variable and
/// how `DAWAT` converts input text. Assignments do not consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredType {
    /// `NUMERO`
    Integer,
    /// `LETRA`
    Character,
    /// `TINUOD`
    Boolean,
    /// `TIPIK`
    Decimal,
}

impl DeclaredType {
    /// The value held by a variable declared without an initializer.
    ///
    /// # Example
    /// ```
    /// use sugod::interpreter::value::core::{DeclaredType, Value};
    ///
    /// assert_eq!(DeclaredType::Integer.zero_value(), Value::Integer(0));
    /// assert_eq!(DeclaredType::Character.zero_value(), Value::Character('\0'));
    /// assert_eq!(DeclaredType::Boolean.zero_value(), Value::Bool(false));
    /// assert_eq!(DeclaredType::Decimal.zero_value(), Value::Decimal(0.0));
    /// ```
    #[must_use]
    pub const fn zero_value(self) -> Value {
        match self {
            Self::Integer => Value::Integer(0),
            Self::Character => Value::Character('\0'),
            Self::Boolean => Value::Bool(false),
            Self::Decimal => Value::Decimal(0.0),
        }
    }

    /// Source keyword for the type.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Integer => "NUMERO",
            Self::Character => "LETRA",
            Self::Boolean => "TINUOD",
            Self::Decimal => "TIPIK",
        }
    }

    /// Converts one field of `DAWAT` input to a value of this type.
    ///
    /// Returns `None` when the text does not spell a value of the type.
    ///
    /// # Example
    /// ```
    /// use sugod::interpreter::value::core::{DeclaredType, Value};
    ///
    /// assert_eq!(DeclaredType::Integer.parse_input("42"), Some(Value::Integer(42)));
    /// assert_eq!(DeclaredType::Boolean.parse_input("OO"), Some(Value::Bool(true)));
    /// assert_eq!(DeclaredType::Character.parse_input("ab"), None);
    /// ```
    #[must_use]
    pub fn parse_input(self, field: &str) -> Option<Value> {
        match self {
            Self::Integer => field.parse::<i64>().ok().map(Value::Integer),
            Self::Decimal => field.parse::<f64>().ok().map(Value::Decimal),
            Self::Character => {
                let mut chars = field.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Value::Character(c)),
                    _ => None,
                }
            },
            Self::Boolean => match field {
                TRUE_WORD => Some(Value::Bool(true)),
                FALSE_WORD => Some(Value::Bool(false)),
                _ => None,
            },
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
