/// Dispatch of binary operators to their handlers.
pub mod core;

/// Integer and decimal arithmetic.
pub mod scalar;

/// Equality and ordering.
pub mod comparison;

/// `UG`, `O` and `&`.
pub mod logic;
