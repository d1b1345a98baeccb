use std::iter::Peekable;

use crate::{
    ast::Block,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_declaration},
            utils::{accept, current, expect},
        },
    },
};

/// Parses a block delimited by braces.
///
/// Grammar: `block := PUNDOK? "{" declaration* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at `PUNDOK` or the opening brace.
///
/// # Returns
/// The block, positioned at its first token.
///
/// # Errors
/// - [`ParseError::ExpectedToken`] if the opening brace is missing, or if
///   `KATAPUSAN` or the end of input arrives before the closing brace.
/// - Any error from the contained declarations.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Block>
    where I: Iterator<Item = &'a Token> + Clone
{
    let pos = current(tokens)?.pos;
    accept(tokens, &TokenKind::Block);
    expect(tokens, &TokenKind::LBrace, "'{' to open a block")?;

    let mut statements = Vec::new();
    loop {
        let token = current(tokens)?;
        match token.kind {
            TokenKind::RBrace => {
                tokens.next();
                break;
            },
            TokenKind::End | TokenKind::Eof => {
                return Err(ParseError::ExpectedToken { expected: "'}' to close the block",
                                                       found:    token.describe(),
                                                       pos:      token.pos, });
            },
            _ => statements.push(parse_declaration(tokens)?),
        }
    }

    Ok(Block { statements, pos })
}
