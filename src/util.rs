/// Numeric conversion helpers.
///
/// Integer to decimal promotion goes through here so that integers which do
/// not fit exactly in an `f64` are reported instead of silently rounded.
pub mod num;
