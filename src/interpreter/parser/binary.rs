use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses logical OR expressions.
///
/// The rule is: `logical_or := logical_and ("O" logical_and)*`
///
/// Both operands are always evaluated; the tree only records grouping.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_logical_and(tokens)?;
    while let Some(token) = tokens.peek().copied()
          && let Some(op) = token_to_binary_operator(&token.kind)
          && matches!(op, BinaryOperator::Or)
    {
        tokens.next();
        let right = parse_logical_and(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              pos: token.pos };
    }
    Ok(left)
}

/// Parses logical AND expressions.
///
/// The rule is: `logical_and := equality ("UG" equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_equality(tokens)?;
    while let Some(token) = tokens.peek().copied()
          && let Some(op) = token_to_binary_operator(&token.kind)
          && matches!(op, BinaryOperator::And)
    {
        tokens.next();
        let right = parse_equality(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              pos: token.pos };
    }
    Ok(left)
}

/// Parses equality expressions.
///
/// The rule is: `equality := comparison (("==" | "<>") comparison)*`
///
/// `!=` is scanned as `<>`.
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_comparison(tokens)?;
    while let Some(token) = tokens.peek().copied()
          && let Some(op) = token_to_binary_operator(&token.kind)
          && matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
    {
        tokens.next();
        let right = parse_comparison(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              pos: token.pos };
    }
    Ok(left)
}

/// Parses ordering comparisons.
///
/// The rule is: `comparison := term ((">" | ">=" | "<" | "<=") term)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_term(tokens)?;
    while let Some(token) = tokens.peek().copied()
          && let Some(op) = token_to_binary_operator(&token.kind)
          && matches!(op,
                      BinaryOperator::Less
                      | BinaryOperator::LessEqual
                      | BinaryOperator::Greater
                      | BinaryOperator::GreaterEqual)
    {
        tokens.next();
        let right = parse_term(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              pos: token.pos };
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `term := factor (("+" | "-") factor)*`
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_factor(tokens)?;
    while let Some(token) = tokens.peek().copied()
          && let Some(op) = token_to_binary_operator(&token.kind)
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        tokens.next();
        let right = parse_factor(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              pos: token.pos };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// The rule is: `factor := unary (("*" | "/" | "%") unary)*`
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_unary(tokens)?;
    while let Some(token) = tokens.peek().copied()
          && let Some(op) = token_to_binary_operator(&token.kind)
          && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
    {
        tokens.next();
        let right = parse_unary(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              pos: token.pos };
    }
    Ok(left)
}

/// Maps a token to its binary operator, if it is one.
///
/// `&` is handled by the expression entry point and is not listed here.
fn token_to_binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Percent => Some(BinaryOperator::Mod),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::NotEqual => Some(BinaryOperator::NotEqual),
        TokenKind::And => Some(BinaryOperator::And),
        TokenKind::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}
