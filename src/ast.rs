use std::fmt;

use crate::interpreter::value::core::{DeclaredType, Value};

/// A location in the source text.
///
/// Lines and columns are both 1-based. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// The source line.
    pub line:   usize,
    /// The column within `line`.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// An abstract syntax tree node representing an expression.
///
/// Expressions always produce exactly one [`Value`] when evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A constant decoded by the scanner.
    Literal {
        /// The constant value.
        value: Value,
        /// Where the literal starts.
        pos:   Position,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Where the reference starts.
        pos:  Position,
    },
    /// Assignment to an existing variable. Evaluates to the assigned value so
    /// that `x = y = 4` chains.
    Assign {
        /// Name of the assigned variable.
        name:  String,
        /// The new value.
        value: Box<Self>,
        /// Position of the target identifier.
        pos:   Position,
    },
    /// A prefix operation.
    Unary {
        /// The operator.
        op:    UnaryOperator,
        /// The operand.
        right: Box<Self>,
        /// Position of the operator token.
        pos:   Position,
    },
    /// An infix operation. Both operands are always evaluated.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Position of the operator token.
        pos:   Position,
    },
}

impl Expr {
    /// Gets the source position of `self`.
    ///
    /// ## Example
    /// ```
    /// use sugod::ast::{Expr, Position};
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             pos:  Position::new(5, 3), };
    ///
    /// assert_eq!(expr.position(), Position::new(5, 3));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Literal { pos, .. }
            | Self::Variable { pos, .. }
            | Self::Assign { pos, .. }
            | Self::Unary { pos, .. }
            | Self::Binary { pos, .. } => *pos,
        }
    }
}

/// A brace-delimited statement sequence with its own variable frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Statements in source order.
    pub statements: Vec<Statement>,
    /// Position of the opening brace (or of `PUNDOK`).
    pub pos:        Position,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `MUGNA NUMERO a, b, c = 5`
    ///
    /// The initializer, when present, is evaluated once and the same value is
    /// bound to every name.
    VarDecl {
        /// The declared type, shared by all names.
        declared_type: DeclaredType,
        /// Declared names in source order.
        names:         Vec<String>,
        /// Optional shared initializer.
        initializer:   Option<Expr>,
        /// Position of the type keyword.
        pos:           Position,
    },
    /// `IPAKITA: expr`
    Print {
        /// The printed expression.
        value: Expr,
        /// Position of `IPAKITA`.
        pos:   Position,
    },
    /// `DAWAT: a, b`
    Read {
        /// Variables receiving the input fields.
        names: Vec<String>,
        /// Position of `DAWAT`.
        pos:   Position,
    },
    /// A nested block.
    Block(Block),
    /// `KUNG cond { ... } KUNG WALA { ... }`
    If {
        /// Tested by truthiness.
        condition:   Expr,
        /// Runs when the condition holds.
        then_branch: Block,
        /// Runs otherwise. An else-if chain is a block holding another `If`.
        else_branch: Option<Block>,
        /// Position of `KUNG`.
        pos:         Position,
    },
    /// `ALANG SA (init, cond, step) { ... }`
    For {
        /// Runs once, inside the loop frame.
        initializer: Box<Self>,
        /// Re-checked before every iteration.
        condition:   Expr,
        /// Runs after every iteration of the body.
        increment:   Box<Self>,
        /// The loop body.
        body:        Block,
        /// Position of `ALANG SA`.
        pos:         Position,
    },
    /// An expression evaluated for its effect.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Where the expression starts.
        pos:  Position,
    },
}

impl Statement {
    /// Gets the source position of `self`.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::VarDecl { pos, .. }
            | Self::Print { pos, .. }
            | Self::Read { pos, .. }
            | Self::If { pos, .. }
            | Self::For { pos, .. }
            | Self::Expression { pos, .. } => *pos,
            Self::Block(block) => block.pos,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`<>`)
    NotEqual,
    /// Logical and (`UG`)
    And,
    /// Logical or (`O`)
    Or,
    /// Text concatenation (`&`)
    Concat,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Arithmetic identity (`+x`).
    Plus,
    /// Logical not (`DILI x`).
    Not,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, And, Concat, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "<>",
            And => "UG",
            Or => "O",
            Concat => "&",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Plus => "+",
            Self::Not => "DILI",
        };
        write!(f, "{operator}")
    }
}
