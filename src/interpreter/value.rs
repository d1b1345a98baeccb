/// Runtime values and declared variable types.
///
/// Defines the closed `Value` enum produced by literals and operators, the
/// `DeclaredType` metadata attached to every variable slot, and the display
/// conversion used by printing and concatenation.
pub mod core;
