use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{BinaryOperator, Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_logical_or,
            statement::{parse_statement, parse_var_decl},
            utils::{current, synchronize},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// Grammar: `program := SUGOD declaration* KATAPUSAN`
///
/// Nothing but the end of input may follow `KATAPUSAN`.
///
/// # Errors
/// Returns the first [`ParseError`] found.
///
/// # Example
/// ```
/// use sugod::interpreter::{lexer::scan, parser::core::parse_program};
///
/// let tokens = scan("SUGOD MUGNA NUMERO x = 1 IPAKITA: x KATAPUSAN").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// assert!(parse_program(&scan("SUGOD IPAKITA 1 KATAPUSAN").unwrap()).is_err());
/// ```
pub fn parse_program(tokens: &[Token]) -> ParseResult<Vec<Statement>> {
    let mut tokens = tokens.iter().peekable();

    parse_begin(&mut tokens)?;

    let mut statements = Vec::new();
    while !at_end(&mut tokens)? {
        statements.push(parse_declaration(&mut tokens)?);
    }

    parse_end(&mut tokens)?;

    debug!(statements = statements.len(), "parsed program");
    Ok(statements)
}

/// Parses a whole program and collects every syntax error instead of
/// stopping at the first one.
///
/// After a failed declaration the parser skips ahead to the next statement
/// keyword or `KATAPUSAN` and carries on. An empty result means the program
/// is syntactically valid.
///
/// # Example
/// ```
/// use sugod::interpreter::{lexer::scan, parser::core::check_program};
///
/// let source = "SUGOD
///     IPAKITA 1
///     MUGNA NUMERO = 2
///     IPAKITA: 3
/// KATAPUSAN";
/// let errors = check_program(&scan(source).unwrap());
///
/// assert_eq!(errors.len(), 2);
/// ```
pub fn check_program(tokens: &[Token]) -> Vec<ParseError> {
    let mut errors = Vec::new();
    let mut tokens = tokens.iter().peekable();

    if let Err(error) = parse_begin(&mut tokens) {
        errors.push(error);
    }

    loop {
        match at_end(&mut tokens) {
            Ok(false) => {},
            Ok(true) => break,
            Err(error) => {
                errors.push(error);
                return errors;
            },
        }

        let before = tokens.peek().copied();
        if let Err(error) = parse_declaration(&mut tokens) {
            errors.push(error);

            // Always make progress past a token that could not start anything.
            if let (Some(before), Some(after)) = (before, tokens.peek().copied())
               && std::ptr::eq(before, after)
            {
                tokens.next();
            }
        }
    }

    if let Err(error) = parse_end(&mut tokens) {
        errors.push(error);
    }

    debug!(errors = errors.len(), "checked program");
    errors
}

/// Parses a declaration: either `MUGNA` followed by a variable declaration,
/// or any other statement.
///
/// Grammar: `declaration := MUGNA var_decl | statement`
///
/// On error the token stream is advanced to the next statement keyword or
/// `KATAPUSAN` before the error is returned.
pub fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let result = match tokens.peek().copied() {
        Some(token) if token.kind == TokenKind::Declare => {
            tokens.next();
            parse_var_decl(tokens)
        },
        _ => parse_statement(tokens),
    };

    if result.is_err() {
        synchronize(tokens);
    }

    result
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. Concatenation binds the
/// loosest, so `IPAKITA: x + 1 & "!"` adds before joining.
///
/// Grammar: `expression := assignment ("&" assignment)*`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_assignment(tokens)?;
    while let Some(token) = tokens.peek().copied()
          && token.kind == TokenKind::Ampersand
    {
        tokens.next();
        let right = parse_assignment(tokens)?;
        left = Expr::Binary { left:  Box::new(left),
                              op:    BinaryOperator::Concat,
                              right: Box::new(right),
                              pos:   token.pos, };
    }
    Ok(left)
}

/// Parses an assignment, which is right-associative.
///
/// Grammar: `assignment := logical_or ("=" expression)?`
///
/// # Errors
/// [`ParseError::InvalidAssignmentTarget`] when the left side is anything
/// other than a bare variable.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let target = parse_logical_or(tokens)?;

    if let Some(token) = tokens.peek().copied()
       && token.kind == TokenKind::Equals
    {
        tokens.next();
        let value = parse_expression(tokens)?;

        return match target {
            Expr::Variable { name, pos } => Ok(Expr::Assign { name,
                                                              value: Box::new(value),
                                                              pos }),
            _ => Err(ParseError::InvalidAssignmentTarget { pos: token.pos }),
        };
    }

    Ok(target)
}

fn parse_begin<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = current(tokens)?;
    if token.kind != TokenKind::Begin {
        return Err(ParseError::MissingBegin { found: token.describe(),
                                              pos:   token.pos, });
    }
    tokens.next();
    Ok(())
}

fn at_end<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<bool>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = current(tokens)?;
    Ok(matches!(token.kind, TokenKind::End | TokenKind::Eof))
}

fn parse_end<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = current(tokens)?;
    if token.kind != TokenKind::End {
        return Err(ParseError::MissingEnd { pos: token.pos });
    }
    tokens.next();

    let trailing = current(tokens)?;
    if trailing.kind != TokenKind::Eof {
        return Err(ParseError::UnexpectedTrailingTokens { token: trailing.describe(),
                                                          pos:   trailing.pos, });
    }
    Ok(())
}
