/// Core evaluation logic and environment management.
///
/// Contains the main evaluation engine, the mutable variable environment,
/// and error propagation.
pub mod core;

/// Binary operator evaluation logic.
///
/// Implements the element-wise operator library: addition, subtraction,
/// multiplication, exponentiation, minimum, and maximum over scalars and
/// equal-length vectors.
pub mod binary;

/// Reduce/scan operator evaluation logic.
///
/// Implements the whole-vector fold library: sum and product reductions and
/// their running-fold (scan) counterparts.
pub mod unary;
