use crate::ast::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// `found` fields hold the lexeme of the offending token, or `end of input`.
pub enum ParseError {
    /// The program does not start with `SUGOD`.
    MissingBegin {
        /// The token found instead.
        found: String,
        /// Where it was found.
        pos:   Position,
    },
    /// The input ended before `KATAPUSAN`.
    MissingEnd {
        /// The end of input.
        pos: Position,
    },
    /// Tokens follow `KATAPUSAN`.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// Where it was found.
        pos:   Position,
    },
    /// `MUGNA` is not followed by `NUMERO`, `LETRA`, `TINUOD` or `TIPIK`.
    ExpectedType {
        /// The token found instead.
        found: String,
        /// Where it was found.
        pos:   Position,
    },
    /// An identifier was required, e.g. in a declaration list.
    ExpectedIdentifier {
        /// The token found instead.
        found: String,
        /// Where it was found.
        pos:   Position,
    },
    /// The left side of `=` is not a bare variable.
    InvalidAssignmentTarget {
        /// Position of the `=`.
        pos: Position,
    },
    /// A specific punctuation token was required.
    ExpectedToken {
        /// What the grammar requires, e.g. `':' after IPAKITA`.
        expected: &'static str,
        /// The token found instead.
        found:    String,
        /// Where it was found.
        pos:      Position,
    },
    /// An expression was required but the token cannot start one.
    ExpectedExpression {
        /// The token found instead.
        found: String,
        /// Where it was found.
        pos:   Position,
    },
}

impl ParseError {
    /// Where the error was detected.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::MissingBegin { pos, .. }
            | Self::MissingEnd { pos }
            | Self::UnexpectedTrailingTokens { pos, .. }
            | Self::ExpectedType { pos, .. }
            | Self::ExpectedIdentifier { pos, .. }
            | Self::InvalidAssignmentTarget { pos }
            | Self::ExpectedToken { pos, .. }
            | Self::ExpectedExpression { pos, .. } => *pos,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingBegin { found, pos } => {
                write!(f, "Error on {pos}: Program must start with SUGOD, found {found}.")
            },
            Self::MissingEnd { pos } => {
                write!(f, "Error on {pos}: Program must end with KATAPUSAN.")
            },
            Self::UnexpectedTrailingTokens { token, pos } => {
                write!(f, "Error on {pos}: Unexpected {token} after KATAPUSAN.")
            },
            Self::ExpectedType { found, pos } => write!(f,
                                                        "Error on {pos}: Expected NUMERO, LETRA, TINUOD or TIPIK after MUGNA, found {found}."),
            Self::ExpectedIdentifier { found, pos } => {
                write!(f, "Error on {pos}: Expected identifier, found {found}.")
            },
            Self::InvalidAssignmentTarget { pos } => {
                write!(f, "Error on {pos}: Invalid assignment target.")
            },
            Self::ExpectedToken { expected, found, pos } => {
                write!(f, "Error on {pos}: Expected {expected}, found {found}.")
            },
            Self::ExpectedExpression { found, pos } => {
                write!(f, "Error on {pos}: Expected expression, found {found}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
