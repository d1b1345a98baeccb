use std::iter::Peekable;

use crate::{
    ast::{Block, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{accept, current, declared_type, expect, parse_identifier_list},
        },
    },
};

/// Parses a single statement.
///
/// The leading token decides the construct:
/// - `IPAKITA` prints, `DAWAT` reads input.
/// - A type keyword declares variables (the `MUGNA` is optional here).
/// - `KUNG` and `ALANG SA` start conditionals and loops.
/// - `PUNDOK` or `{` start a nested block.
///
/// Anything else is parsed as an expression statement.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = current(tokens)?;
    match token.kind {
        TokenKind::Print => parse_print(tokens),
        TokenKind::Read => parse_read(tokens),
        TokenKind::If => parse_if(tokens),
        TokenKind::For => parse_for(tokens),
        TokenKind::Block | TokenKind::LBrace => Ok(Statement::Block(parse_block(tokens)?)),
        TokenKind::TypeInteger
        | TokenKind::TypeCharacter
        | TokenKind::TypeBoolean
        | TokenKind::TypeDecimal => parse_var_decl(tokens),
        _ => parse_expression_statement(tokens),
    }
}

/// Parses the part of a declaration after `MUGNA`.
///
/// Grammar: `var_decl := type identifier ("," identifier)* ("=" expression)?`
///
/// A single initializer applies to every listed name.
///
/// # Errors
/// - [`ParseError::ExpectedType`] when no type keyword follows.
/// - [`ParseError::ExpectedIdentifier`] for a missing name.
pub fn parse_var_decl<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = current(tokens)?;
    let declared_type =
        declared_type(&token.kind).ok_or_else(|| ParseError::ExpectedType { found: token.describe(),
                                                                            pos:   token.pos, })?;
    tokens.next();

    let names = parse_identifier_list(tokens)?;
    let initializer = if accept(tokens, &TokenKind::Equals) {
        Some(parse_expression(tokens)?)
    } else {
        None
    };

    Ok(Statement::VarDecl { declared_type,
                            names,
                            initializer,
                            pos: token.pos })
}

/// Parses `IPAKITA: expression`.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = expect(tokens, &TokenKind::Print, "IPAKITA")?;
    expect(tokens, &TokenKind::Colon, "':' after IPAKITA")?;
    let value = parse_expression(tokens)?;

    Ok(Statement::Print { value,
                          pos: keyword.pos })
}

/// Parses `DAWAT: identifier ("," identifier)*`.
fn parse_read<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = expect(tokens, &TokenKind::Read, "DAWAT")?;
    expect(tokens, &TokenKind::Colon, "':' after DAWAT")?;
    let names = parse_identifier_list(tokens)?;

    Ok(Statement::Read { names,
                         pos: keyword.pos })
}

/// Parses a conditional with optional `KUNG DILI` and `KUNG WALA` branches.
///
/// Syntax:
/// ```text
///     KUNG <condition> { ... }
///     KUNG DILI <condition> { ... }
///     KUNG WALA { ... }
/// ```
/// Each `KUNG DILI` becomes an else branch holding a nested `If`.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = expect(tokens, &TokenKind::If, "KUNG")?;
    parse_conditional(tokens, keyword)
}

fn parse_conditional<'a, I>(tokens: &mut Peekable<I>, keyword: &Token) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let condition = parse_expression(tokens)?;
    let then_branch = parse_block(tokens)?;

    let next = current(tokens)?;
    let else_branch = match next.kind {
        TokenKind::ElseIf => {
            tokens.next();
            let nested = parse_conditional(tokens, next)?;
            Some(Block { statements: vec![nested],
                         pos:        next.pos, })
        },
        TokenKind::Else => {
            tokens.next();
            Some(parse_block(tokens)?)
        },
        _ => None,
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       pos: keyword.pos })
}

/// Parses a counted loop.
///
/// Grammar: `for := ALANG SA "("? clause "," expression "," clause ")"? block`
///
/// The parentheses are optional but must be balanced. A leading `(` opens
/// them only when its matching `)` comes right before the body block, so an
/// unparenthesized loop may start with a parenthesized expression. Each
/// clause is either a `MUGNA` declaration or an expression statement.
///
/// # Errors
/// [`ParseError::ExpectedToken`] for a missing comma between clauses, a
/// missing closing parenthesis, or a missing block.
fn parse_for<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = expect(tokens, &TokenKind::For, "ALANG SA")?;
    let parenthesized = has_loop_parentheses(tokens);
    if parenthesized {
        expect(tokens, &TokenKind::LParen, "'(' before the loop clauses")?;
    }

    let initializer = parse_for_clause(tokens)?;
    expect(tokens, &TokenKind::Comma, "',' after the loop initializer")?;
    let condition = parse_expression(tokens)?;
    expect(tokens, &TokenKind::Comma, "',' after the loop condition")?;
    let increment = parse_for_clause(tokens)?;

    if parenthesized {
        expect(tokens, &TokenKind::RParen, "')' after the loop clauses")?;
    }

    let body = parse_block(tokens)?;

    Ok(Statement::For { initializer: Box::new(initializer),
                        condition,
                        increment: Box::new(increment),
                        body,
                        pos: keyword.pos })
}

/// Looks ahead for a `(` whose matching `)` is followed by a block.
fn has_loop_parentheses<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut lookahead = tokens.clone();
    if !accept(&mut lookahead, &TokenKind::LParen) {
        return false;
    }

    let mut depth = 1usize;
    for token in lookahead.by_ref() {
        match token.kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            },
            TokenKind::Eof => return false,
            _ => {},
        }
    }

    depth == 0
    && matches!(lookahead.peek().map(|token| &token.kind),
                Some(TokenKind::LBrace | TokenKind::Block))
}

fn parse_for_clause<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    if accept(tokens, &TokenKind::Declare) {
        return parse_var_decl(tokens);
    }
    parse_expression_statement(tokens)
}

fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let pos = current(tokens)?.pos;
    let expr = parse_expression(tokens)?;

    Ok(Statement::Expression { expr, pos })
}
