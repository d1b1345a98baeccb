use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{current, expect},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `+`  (numeric identity)
/// - `DILI`  (logical not)
///
/// Unary operators are right-associative, so `DILI -x` is parsed as
/// `DILI (-x)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+" | "DILI") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = current(tokens)?;
    let op = match token.kind {
        TokenKind::Minus => UnaryOperator::Negate,
        TokenKind::Plus => UnaryOperator::Plus,
        TokenKind::Not => UnaryOperator::Not,
        _ => return parse_primary(tokens),
    };

    tokens.next();
    let right = parse_unary(tokens)?;
    Ok(Expr::Unary { op,
                     right: Box::new(right),
                     pos: token.pos })
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := literal
///              | identifier
///              | "(" expression ")"
/// ```
///
/// # Errors
/// [`ParseError::ExpectedExpression`] for any other token, including the
/// end of the program where an operand was required.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = current(tokens)?;

    if let Some(value) = token.value() {
        tokens.next();
        return Ok(Expr::Literal { value,
                                  pos: token.pos });
    }

    match &token.kind {
        TokenKind::Identifier(name) => {
            tokens.next();
            Ok(Expr::Variable { name: name.clone(),
                                pos:  token.pos, })
        },
        TokenKind::LParen => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            expect(tokens, &TokenKind::RParen, "')' after expression")?;
            Ok(expr)
        },
        _ => Err(ParseError::ExpectedExpression { found: token.describe(),
                                                  pos:   token.pos, }),
    }
}
