use logos::Logos;
use tracing::debug;

use crate::{
    ast::Position,
    error::LexError,
    interpreter::value::core::{FALSE_WORD, NEWLINE_SENTINEL, TRUE_WORD, Value},
};

/// The kind of a lexical token, with the decoded value for literals.
///
/// Whitespace, newlines and `--` comments are skipped and never produce a
/// token. Keywords are matched case-sensitively and win over identifiers of
/// the same length. Multi-word keywords such as `KUNG WALA` are scanned word
/// by word and joined by [`scan`] when only spaces or tabs separate them.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// Decimal literal tokens, such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", parse_decimal)]
    Decimal(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Character literal tokens, such as `'a'`.
    #[regex(r"'[^'\n\r]'", parse_character)]
    Character(char),
    /// Escaped character tokens, such as `[#]`.
    #[regex(r"\[[^\n\r]\]", parse_escape)]
    Escape(char),
    /// Double-quoted text. May span lines.
    #[regex(r#""[^"]*""#, parse_text, allow_greedy = true)]
    Text(String),
    /// `"OO"` or `"DILI"`. Produced from [`TokenKind::Text`] by [`scan`].
    Bool(bool),
    /// `$`
    #[token("$")]
    Dollar,
    /// `SUGOD`
    #[token("SUGOD")]
    Begin,
    /// `KATAPUSAN`
    #[token("KATAPUSAN")]
    End,
    /// `MUGNA`
    #[token("MUGNA")]
    Declare,
    /// `NUMERO`
    #[token("NUMERO")]
    TypeInteger,
    /// `LETRA`
    #[token("LETRA")]
    TypeCharacter,
    /// `TINUOD`
    #[token("TINUOD")]
    TypeBoolean,
    /// `TIPIK`
    #[token("TIPIK")]
    TypeDecimal,
    /// `IPAKITA`
    #[token("IPAKITA")]
    Print,
    /// `DAWAT`
    #[token("DAWAT")]
    Read,
    /// `KUNG`
    #[token("KUNG")]
    If,
    /// `KUNG DILI`. Produced by [`scan`].
    ElseIf,
    /// `KUNG WALA`. Produced by [`scan`].
    Else,
    /// `ALANG SA`. Produced by [`scan`].
    For,
    /// `PUNDOK`
    #[token("PUNDOK")]
    Block,
    /// `UG`
    #[token("UG")]
    And,
    /// `O`
    #[token("O", priority = 3)]
    Or,
    /// `DILI`
    #[token("DILI")]
    Not,
    /// Identifier tokens; variable names such as `x` or `_total1`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `-- Comments.`
    #[regex(r"--[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `<>` or `!=`
    #[token("<>")]
    #[token("!=")]
    NotEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// End of input. Always the last token produced by [`scan`].
    Eof,
}

/// A lexical token with its source text and position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the token is, including any decoded literal.
    pub kind:   TokenKind,
    /// The exact source text of the token.
    pub lexeme: String,
    /// Where the token starts.
    pub pos:    Position,
}

impl Token {
    /// The decoded literal carried by the token, if it is a literal.
    ///
    /// # Example
    /// ```
    /// use sugod::interpreter::{lexer::scan, value::core::Value};
    ///
    /// let tokens = scan("2.5 x").unwrap();
    /// assert_eq!(tokens[0].value(), Some(Value::Decimal(2.5)));
    /// assert_eq!(tokens[1].value(), None);
    /// ```
    #[must_use]
    pub fn value(&self) -> Option<Value> {
        match &self.kind {
            TokenKind::Integer(n) => Some(Value::Integer(*n)),
            TokenKind::Decimal(d) => Some(Value::Decimal(*d)),
            TokenKind::Character(c) | TokenKind::Escape(c) => Some(Value::Character(*c)),
            TokenKind::Text(s) => Some(Value::Text(s.clone())),
            TokenKind::Bool(b) => Some(Value::Bool(*b)),
            TokenKind::Dollar => Some(Value::Text(NEWLINE_SENTINEL.to_string())),
            _ => None,
        }
    }

    /// Describes the token for diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("'{}'", self.lexeme),
        }
    }
}

/// Converts source text into tokens, ending with [`TokenKind::Eof`].
///
/// Scanning stops at the first lexical error; no tokens past it are
/// produced.
///
/// # Errors
/// Returns a [`LexError`] for unrecognized characters, a `!` not followed by
/// `=`, malformed character literals, unterminated text literals and integer
/// literals that overflow.
///
/// # Example
/// ```
/// use sugod::interpreter::lexer::{TokenKind, scan};
///
/// let tokens = scan("MUGNA NUMERO x = 5").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Declare,
///                 TokenKind::TypeInteger,
///                 TokenKind::Identifier("x".to_string()),
///                 TokenKind::Equals,
///                 TokenKind::Integer(5),
///                 TokenKind::Eof]);
/// ```
pub fn scan(source: &str) -> Result<Vec<Token>, LexError> {
    let lines = LineIndex::new(source);
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut previous = 0..0;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let lexeme = lexer.slice();
        let pos = lines.position(source, span.start);

        let kind = match result {
            Ok(TokenKind::Text(text)) if text == TRUE_WORD => TokenKind::Bool(true),
            Ok(TokenKind::Text(text)) if text == FALSE_WORD => TokenKind::Bool(false),
            Ok(kind) => kind,
            Err(()) => return Err(classify_error(lexeme, pos)),
        };

        if is_inline_gap(&source[previous.end..span.start])
           && let Some(last) = tokens.last_mut()
           && let Some(joined) = join_keywords(&last.kind, &kind)
        {
            last.kind = joined;
            last.lexeme = source[previous.start..span.end].to_string();
            previous.end = span.end;
            continue;
        }

        tokens.push(Token { kind,
                            lexeme: lexeme.to_string(),
                            pos });
        previous = span;
    }

    tokens.push(Token { kind:   TokenKind::Eof,
                        lexeme: String::new(),
                        pos:    lines.position(source, source.len()), });

    debug!(count = tokens.len(), "scanned source");
    Ok(tokens)
}

/// The keyword two adjacent words form, if any.
///
/// `WALA`, `ALANG` and `SA` are plain identifiers on their own.
fn join_keywords(first: &TokenKind, second: &TokenKind) -> Option<TokenKind> {
    match (first, second) {
        (TokenKind::If, TokenKind::Not) => Some(TokenKind::ElseIf),
        (TokenKind::If, TokenKind::Identifier(word)) if word == "WALA" => Some(TokenKind::Else),
        (TokenKind::Identifier(left), TokenKind::Identifier(right))
            if left == "ALANG" && right == "SA" =>
        {
            Some(TokenKind::For)
        },
        _ => None,
    }
}

/// Whether two words separated by `gap` sit on the same line with nothing
/// but spaces or tabs between them.
fn is_inline_gap(gap: &str) -> bool {
    !gap.is_empty() && gap.bytes().all(|b| b == b' ' || b == b'\t')
}

/// Picks the lexical error for a slice the lexer could not match.
fn classify_error(slice: &str, pos: Position) -> LexError {
    match slice.chars().next() {
        Some('\'') => LexError::UnterminatedCharacter { pos },
        Some('"') => LexError::UnterminatedText { pos },
        Some('!') => LexError::LoneBang { pos },
        Some(c) if c.is_ascii_digit() => LexError::LiteralTooLarge { lexeme: slice.to_string(),
                                                                     pos },
        Some(character) => LexError::UnexpectedCharacter { character, pos },
        None => LexError::UnexpectedCharacter { character: '\0',
                                                pos },
    }
}

/// Byte offsets of line starts, for turning spans into line and column.
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let starts = std::iter::once(0).chain(source.match_indices('\n').map(|(i, _)| i + 1))
                                       .collect();
        Self { starts }
    }

    fn position(&self, source: &str, offset: usize) -> Position {
        let line = self.starts.partition_point(|&start| start <= offset);
        let start = self.starts[line - 1];
        let column = source[start..offset].chars().count() + 1;
        Position::new(line, column)
    }
}

/// Parses a decimal literal from the current token slice.
fn parse_decimal(lex: &logos::Lexer<TokenKind>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the literal does not fit in an `i64`, which the
/// scanner reports as [`LexError::LiteralTooLarge`].
fn parse_integer(lex: &logos::Lexer<TokenKind>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Extracts the character between the quotes of `'c'`.
fn parse_character(lex: &logos::Lexer<TokenKind>) -> Option<char> {
    lex.slice().chars().nth(1)
}

/// Extracts the character between the brackets of `[c]`.
fn parse_escape(lex: &logos::Lexer<TokenKind>) -> Option<char> {
    lex.slice().chars().nth(1)
}

/// Strips the surrounding double quotes.
fn parse_text(lex: &logos::Lexer<TokenKind>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn multi_word_keywords_are_single_tokens() {
        assert_eq!(kinds("KUNG WALA KUNG  DILI ALANG\tSA KUNG"),
                   vec![TokenKind::Else,
                        TokenKind::ElseIf,
                        TokenKind::For,
                        TokenKind::If,
                        TokenKind::Eof]);
    }

    #[test]
    fn multi_word_keywords_keep_their_lexeme() {
        let tokens = scan("KUNG \t WALA").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Else);
        assert_eq!(tokens[0].lexeme, "KUNG \t WALA");
        assert_eq!(tokens[0].pos, Position::new(1, 1));
    }

    #[test]
    fn multi_word_keywords_stay_on_one_line() {
        assert_eq!(kinds("KUNG\nWALA ALANG\nSA"),
                   vec![TokenKind::If,
                        TokenKind::Identifier("WALA".to_string()),
                        TokenKind::Identifier("ALANG".to_string()),
                        TokenKind::Identifier("SA".to_string()),
                        TokenKind::Eof]);
    }

    #[test]
    fn keyword_prefixed_identifiers_stay_identifiers() {
        let ident = |name: &str| TokenKind::Identifier(name.to_string());

        assert_eq!(kinds("UGAT Oscar KUNGx DILIGENT SUGODAN O x"),
                   vec![ident("UGAT"),
                        ident("Oscar"),
                        ident("KUNGx"),
                        ident("DILIGENT"),
                        ident("SUGODAN"),
                        TokenKind::Or,
                        ident("x"),
                        TokenKind::Eof]);
        assert_eq!(kinds("KUNG DILIGENT KUNG WALAY ALANG SAKTO ALANGAN SA"),
                   vec![TokenKind::If,
                        ident("DILIGENT"),
                        TokenKind::If,
                        ident("WALAY"),
                        ident("ALANG"),
                        ident("SAKTO"),
                        ident("ALANGAN"),
                        ident("SA"),
                        TokenKind::Eof]);
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(kinds("sugod"),
                   vec![TokenKind::Identifier("sugod".to_string()), TokenKind::Eof]);
    }

    #[test]
    fn boolean_words_decode_to_booleans() {
        assert_eq!(kinds(r#""OO" "DILI" "oo""#),
                   vec![TokenKind::Bool(true),
                        TokenKind::Bool(false),
                        TokenKind::Text("oo".to_string()),
                        TokenKind::Eof]);
    }

    #[test]
    fn integers_and_decimals() {
        assert_eq!(kinds("12 3.25"),
                   vec![TokenKind::Integer(12), TokenKind::Decimal(3.25), TokenKind::Eof]);
    }

    #[test]
    fn comments_and_newlines_emit_nothing() {
        assert_eq!(kinds("x -- a comment\n-- another\ny"),
                   vec![TokenKind::Identifier("x".to_string()),
                        TokenKind::Identifier("y".to_string()),
                        TokenKind::Eof]);
    }

    #[test]
    fn operators() {
        assert_eq!(kinds("= == <> != < <= > >= &"),
                   vec![TokenKind::Equals,
                        TokenKind::EqualEqual,
                        TokenKind::NotEqual,
                        TokenKind::NotEqual,
                        TokenKind::Less,
                        TokenKind::LessEqual,
                        TokenKind::Greater,
                        TokenKind::GreaterEqual,
                        TokenKind::Ampersand,
                        TokenKind::Eof]);
    }

    #[test]
    fn positions_track_lines_and_columns() {
        let tokens = scan("SUGOD\n  x\r\n\"a\nb\" y").unwrap();
        assert_eq!(tokens[0].pos, Position::new(1, 1));
        assert_eq!(tokens[1].pos, Position::new(2, 3));
        assert_eq!(tokens[2].pos, Position::new(3, 1));
        assert_eq!(tokens[3].pos, Position::new(4, 4));
    }

    #[test]
    fn lone_bang_is_an_error() {
        assert_eq!(scan("x ! y"),
                   Err(LexError::LoneBang { pos: Position::new(1, 3) }));
    }

    #[test]
    fn unexpected_character_is_an_error() {
        assert_eq!(scan("x\n  @"),
                   Err(LexError::UnexpectedCharacter { character: '@',
                                                       pos:       Position::new(2, 3), }));
    }

    #[test]
    fn malformed_character_literals_are_errors() {
        assert!(matches!(scan("'ab'"), Err(LexError::UnterminatedCharacter { .. })));
        assert!(matches!(scan("'a"), Err(LexError::UnterminatedCharacter { .. })));
        assert!(matches!(scan("'\n'"), Err(LexError::UnterminatedCharacter { .. })));
    }

    #[test]
    fn unterminated_text_is_an_error() {
        assert!(matches!(scan("\"abc"), Err(LexError::UnterminatedText { .. })));
    }

    #[test]
    fn escapes_and_newline_sentinel() {
        let tokens = scan("[#] $").unwrap();
        assert_eq!(tokens[0].value(), Some(Value::Character('#')));
        assert_eq!(tokens[1].value(), Some(Value::Text("$".to_string())));
    }
}
