use crate::{ast::Position, interpreter::value::core::DeclaredType};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Read or assignment of a name no active frame declares.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// Where the name was used.
        pos:  Position,
    },
    /// Division or remainder by an integer or decimal zero.
    DivisionByZero {
        /// Position of the operator.
        pos: Position,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// Position of the operator.
        pos: Position,
    },
    /// An operator was applied to operands it does not accept.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// Position of the operator.
        pos:     Position,
    },
    /// A numeric value was expected, but not found.
    ExpectedNumber {
        /// Kind of the value found instead.
        found: &'static str,
        /// Where the value was needed.
        pos:   Position,
    },
    /// An integer could not be promoted to a decimal without rounding.
    PrecisionLoss {
        /// Where the promotion happened.
        pos: Position,
    },
    /// `DAWAT` ran but the input source had no more lines.
    InputUnavailable {
        /// Position of `DAWAT`.
        pos: Position,
    },
    /// `DAWAT` received a different number of fields than it names.
    InputCountMismatch {
        /// Number of variables named.
        expected: usize,
        /// Number of comma-separated fields received.
        found:    usize,
        /// Position of `DAWAT`.
        pos:      Position,
    },
    /// An input field does not spell a value of the variable's type.
    InvalidInput {
        /// The receiving variable.
        name:     String,
        /// Its declared type.
        expected: DeclaredType,
        /// The rejected field.
        input:    String,
        /// Position of `DAWAT`.
        pos:      Position,
    },
}

impl RuntimeError {
    /// Where the error was raised.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnknownVariable { pos, .. }
            | Self::DivisionByZero { pos }
            | Self::Overflow { pos }
            | Self::TypeError { pos, .. }
            | Self::ExpectedNumber { pos, .. }
            | Self::PrecisionLoss { pos }
            | Self::InputUnavailable { pos }
            | Self::InputCountMismatch { pos, .. }
            | Self::InvalidInput { pos, .. } => *pos,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, pos } => {
                write!(f, "Error on {pos}: Unknown variable '{name}'.")
            },
            Self::DivisionByZero { pos } => write!(f, "Error on {pos}: Division by zero."),
            Self::Overflow { pos } => write!(f,
                                             "Error on {pos}: Integer overflow while trying to compute result."),
            Self::TypeError { details, pos } => {
                write!(f, "Error on {pos}: Type error: {details}.")
            },
            Self::ExpectedNumber { found, pos } => {
                write!(f, "Error on {pos}: Expected number, found {found}.")
            },
            Self::PrecisionLoss { pos } => write!(f,
                                                    "Error on {pos}: Integer is too large to convert to a decimal."),
            Self::InputUnavailable { pos } => {
                write!(f, "Error on {pos}: No input available for DAWAT.")
            },
            Self::InputCountMismatch { expected, found, pos } => write!(f,
                                                                        "Error on {pos}: DAWAT expects {expected} value(s), but received {found}."),
            Self::InvalidInput { name,
                                 expected,
                                 input,
                                 pos, } => write!(f,
                                                  "Error on {pos}: Input '{input}' is not a valid {expected} for '{name}'."),
        }
    }
}

impl std::error::Error for RuntimeError {}
