use std::iter::Peekable;

use crate::{
    ast::Position,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
        value::core::DeclaredType,
    },
};

/// Returns the next token without consuming it.
///
/// The scanner always ends the stream with [`TokenKind::Eof`], which no rule
/// consumes, so running out of tokens only happens after a parser bug; it is
/// reported as a missing `KATAPUSAN`.
pub(in crate::interpreter::parser) fn current<'a, I>(tokens: &mut Peekable<I>)
                                                     -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.peek()
          .copied()
          .ok_or(ParseError::MissingEnd { pos: Position::default() })
}

/// Consumes the next token if it is of `kind`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `kind`: The required token kind.
/// - `expected`: How to describe the required token in the error.
///
/// # Errors
/// [`ParseError::ExpectedToken`] naming `expected` and the token found.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: &TokenKind,
                                                    expected: &'static str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = current(tokens)?;
    if token.kind != *kind {
        return Err(ParseError::ExpectedToken { expected,
                                               found: token.describe(),
                                               pos: token.pos });
    }
    tokens.next();
    Ok(token)
}

/// Consumes the next token if it is of `kind` and reports whether it did.
pub(in crate::interpreter::parser) fn accept<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: &TokenKind)
                                                    -> bool
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(token) = tokens.peek()
       && token.kind == *kind
    {
        tokens.next();
        return true;
    }
    false
}

/// Parses a plain identifier and returns its name.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = current(tokens)?;
    match &token.kind {
        TokenKind::Identifier(name) => {
            tokens.next();
            Ok(name.clone())
        },
        _ => Err(ParseError::ExpectedIdentifier { found: token.describe(),
                                                  pos:   token.pos, }),
    }
}

/// Parses one or more comma-separated identifiers.
///
/// Grammar: `identifiers := identifier ("," identifier)*`
pub(in crate::interpreter::parser) fn parse_identifier_list<'a, I>(tokens: &mut Peekable<I>)
                                                                   -> ParseResult<Vec<String>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut names = vec![parse_identifier(tokens)?];
    while accept(tokens, &TokenKind::Comma) {
        names.push(parse_identifier(tokens)?);
    }
    Ok(names)
}

/// Maps a type keyword to the type it declares.
pub(in crate::interpreter::parser) fn declared_type(kind: &TokenKind)
                                                          -> Option<DeclaredType> {
    match kind {
        TokenKind::TypeInteger => Some(DeclaredType::Integer),
        TokenKind::TypeCharacter => Some(DeclaredType::Character),
        TokenKind::TypeBoolean => Some(DeclaredType::Boolean),
        TokenKind::TypeDecimal => Some(DeclaredType::Decimal),
        _ => None,
    }
}

/// Whether `kind` can only appear at the start of a statement.
fn is_statement_start(kind: &TokenKind) -> bool {
    matches!(kind,
             TokenKind::Declare
             | TokenKind::Print
             | TokenKind::Read
             | TokenKind::If
             | TokenKind::For
             | TokenKind::Block
             | TokenKind::TypeInteger
             | TokenKind::TypeCharacter
             | TokenKind::TypeBoolean
             | TokenKind::TypeDecimal)
}

/// Skips tokens until a statement keyword, `KATAPUSAN` or the end of input.
pub(in crate::interpreter::parser) fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token> + Clone
{
    while let Some(token) = tokens.peek() {
        if matches!(token.kind, TokenKind::End | TokenKind::Eof) || is_statement_start(&token.kind)
        {
            return;
        }
        tokens.next();
    }
}
