use std::fmt;

use crate::ast::Position;

/// Lexical errors.
///
/// Raised by the scanner for characters and literals it cannot turn into
/// tokens. Scanning stops at the first one.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all grammar violations detected while building the syntax tree,
/// such as missing markers, missing punctuation or invalid assignment
/// targets.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero, undeclared variables, type mismatches or bad input.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// A failure from any stage of the pipeline.
///
/// The variant tells a driver which stage failed so it can label the
/// diagnostic. A runtime failure keeps the text printed before the fault.
#[derive(Debug)]
pub enum Error {
    /// The scanner rejected the source.
    Lexical(LexError),
    /// The parser rejected the token sequence.
    Syntax(ParseError),
    /// Evaluation stopped at a fault.
    Runtime {
        /// The fault.
        error:  RuntimeError,
        /// Output produced by print statements before the fault.
        output: String,
    },
}

impl Error {
    /// A short label for the failed stage.
    ///
    /// # Example
    /// ```
    /// use sugod::run;
    ///
    /// let err = run("SUGOD IPAKITA: 1 / 0 KATAPUSAN").unwrap_err();
    /// assert_eq!(err.category(), "runtime error");
    /// ```
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Lexical(_) => "lexical error",
            Self::Syntax(_) => "syntax error",
            Self::Runtime { .. } => "runtime error",
        }
    }

    /// Where the failing stage detected the error.
    ///
    /// # Example
    /// ```
    /// use sugod::{ast::Position, run};
    ///
    /// let err = run("SUGOD\n  IPAKITA: @\nKATAPUSAN").unwrap_err();
    /// assert_eq!(err.position(), Position::new(2, 12));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Lexical(e) => e.position(),
            Self::Syntax(e) => e.position(),
            Self::Runtime { error, .. } => error.position(),
        }
    }

    /// Output printed before a runtime fault. Empty for the other stages.
    #[must_use]
    pub fn partial_output(&self) -> &str {
        match self {
            Self::Runtime { output, .. } => output,
            Self::Lexical(_) | Self::Syntax(_) => "",
        }
    }
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lexical(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Syntax(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexical(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime { error, .. } => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexical(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Runtime { error, .. } => Some(error),
        }
    }
}
