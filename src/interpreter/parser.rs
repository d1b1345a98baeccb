/// Program-level entry points and the expression entry point.
///
/// Holds [`core::parse_program`], [`core::check_program`], the declaration
/// rule with its error resynchronization, and the concatenation and
/// assignment levels of the expression grammar.
pub mod core;

/// Statement parsing.
///
/// Declarations, `IPAKITA`, `DAWAT`, `KUNG` chains, `ALANG SA` loops and
/// expression statements.
pub mod statement;

/// Block parsing.
///
/// Brace-delimited statement sequences, optionally introduced by `PUNDOK`.
pub mod block;

/// Binary operator parsing.
///
/// One function per precedence level, from `O` down to `*`, `/` and `%`.
pub mod binary;

/// Unary and primary expressions.
pub mod unary;

/// Token-stream helpers shared by the other parser modules.
pub mod utils;
