/// Core evaluation logic and context management.
///
/// Contains the runtime context, statement execution, expression dispatch
/// and block scoping.
pub mod core;

/// Binary operator evaluation logic.
///
/// Arithmetic, comparisons, the eager logical operators and concatenation.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Evaluation of `ALANG SA` loops.
pub mod for_loop;

/// Input sources for `DAWAT` and its evaluation.
pub mod input;
