//! # sugod
//!
//! sugod is an interpreter for a small imperative teaching language with
//! Cebuano keywords. Programs live between `SUGOD` and `KATAPUSAN`, declare
//! typed scalar variables with `MUGNA`, print with `IPAKITA`, read input with
//! `DAWAT`, branch with `KUNG` and loop with `ALANG SA`.
//!
//! ```
//! let source = r#"
//! SUGOD
//!     MUGNA NUMERO x, y, z = 5
//!     x = y = 4
//!     IPAKITA: x & z
//! KATAPUSAN
//! "#;
//!
//! assert_eq!(sugod::run(source).unwrap(), "45");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{
        evaluator::{
            core::Context,
            input::{InputSource, NoInput},
        },
        lexer::scan,
        parser::core::{check_program, parse_program},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums that represent the
/// syntactic structure of a program as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source positions to every node for error reporting.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a program.
/// Every error carries the line and column it was detected at, and the
/// top-level [`Error`] keeps the failing stage distinguishable.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (scanner, parser, evaluator).
/// - Attaches positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together scanning, parsing, evaluation, the variable
/// environment and value representations.
///
/// # Responsibilities
/// - Coordinates all core components: scanner, parser, environment,
///   evaluator and value types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
pub mod util;

/// Runs a program and returns everything it printed.
///
/// `DAWAT` has no input available; use [`run_with_input`] to supply some.
///
/// # Errors
/// - [`Error::Lexical`] or [`Error::Syntax`] when the program is rejected
///   before it starts; nothing runs in that case.
/// - [`Error::Runtime`] when execution faults. The error keeps the output
///   printed up to that point.
///
/// # Examples
/// ```
/// use sugod::run;
///
/// let source = "SUGOD
///     ALANG SA (MUGNA NUMERO ctr = 1, ctr <= 3, ctr = ctr + 1) {
///         IPAKITA: ctr
///     }
/// KATAPUSAN";
/// assert_eq!(run(source).unwrap(), "123");
///
/// // Unknown variable.
/// assert!(run("SUGOD IPAKITA: y KATAPUSAN").is_err());
/// ```
pub fn run(source: &str) -> Result<String, Error> {
    run_with_input(source, NoInput)
}

/// Runs a program whose `DAWAT` statements read from `input`.
///
/// # Errors
/// The same as [`run`], plus the input errors `DAWAT` can raise.
///
/// # Examples
/// ```
/// use sugod::{interpreter::evaluator::input::ScriptedInput, run_with_input};
///
/// let source = "SUGOD
///     MUGNA NUMERO a, b
///     DAWAT: a, b
///     IPAKITA: a + b
/// KATAPUSAN";
///
/// assert_eq!(run_with_input(source, ScriptedInput::new(["3, 4"])).unwrap(), "7");
/// ```
pub fn run_with_input(source: &str, input: impl InputSource + 'static) -> Result<String, Error> {
    let tokens = scan(source)?;
    let program = parse_program(&tokens)?;

    let mut context = Context::with_input(input);
    match context.execute(&program) {
        Ok(()) => Ok(context.take_output()),
        Err(error) => {
            debug!(%error, "program faulted");
            Err(Error::Runtime { error,
                                 output: context.take_output() })
        },
    }
}

/// Scans and parses a program without running it, collecting every syntax
/// error rather than only the first.
///
/// A lexical error is reported on its own, since parsing needs the complete
/// token sequence.
///
/// # Errors
/// Every error found, in source order.
///
/// # Examples
/// ```
/// use sugod::check;
///
/// assert!(check("SUGOD MUGNA NUMERO x = 1 KATAPUSAN").is_ok());
///
/// let errors = check("SUGOD MUGNA x IPAKITA 2 KATAPUSAN").unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
pub fn check(source: &str) -> Result<(), Vec<Error>> {
    let tokens = scan(source).map_err(|error| vec![Error::from(error)])?;
    let errors = check_program(&tokens);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.into_iter().map(Error::from).collect())
    }
}
