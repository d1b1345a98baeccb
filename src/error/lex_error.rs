use crate::ast::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning.
pub enum LexError {
    /// A character that starts no token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        pos:       Position,
    },
    /// A `'` that is not followed by exactly one character and a closing `'`.
    UnterminatedCharacter {
        /// Position of the opening quote.
        pos: Position,
    },
    /// A `"` with no closing `"` before the end of input.
    UnterminatedText {
        /// Position of the opening quote.
        pos: Position,
    },
    /// A `!` that is not part of `!=`.
    LoneBang {
        /// Position of the `!`.
        pos: Position,
    },
    /// An integer literal outside the 64-bit range.
    LiteralTooLarge {
        /// The literal as written.
        lexeme: String,
        /// Where the literal starts.
        pos:    Position,
    },
}

impl LexError {
    /// Where the error was detected.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedCharacter { pos, .. }
            | Self::UnterminatedCharacter { pos }
            | Self::UnterminatedText { pos }
            | Self::LoneBang { pos }
            | Self::LiteralTooLarge { pos, .. } => *pos,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, pos } => {
                write!(f, "Error on {pos}: Unexpected character '{character}'.")
            },
            Self::UnterminatedCharacter { pos } => write!(f,
                                                          "Error on {pos}: Character literal must be one character between single quotes."),
            Self::UnterminatedText { pos } => {
                write!(f, "Error on {pos}: Unterminated text literal.")
            },
            Self::LoneBang { pos } => write!(f, "Error on {pos}: Expected '=' after '!'."),
            Self::LiteralTooLarge { lexeme, pos } => {
                write!(f, "Error on {pos}: Integer literal {lexeme} is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
