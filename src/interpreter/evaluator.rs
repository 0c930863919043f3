/// Postfix evaluation and the operand stack.
///
/// Contains the main evaluation loop, the result type shared by all
/// operations, and the handling of values and variable lookups.
pub mod core;

/// The operation dispatch table.
///
/// Routes every [`Operation`](crate::token::Operation) to the function that
/// implements it.
pub mod dispatch;

/// Unary operator evaluation.
///
/// Identity, negation, logical not and bitwise not.
pub mod unary;

/// Binary operator evaluation.
///
/// Arithmetic, exponentiation, bitwise, logical and comparison operators.
pub mod binary;

/// Named function evaluation.
///
/// Mathematical functions, logarithms, `min`/`max` and rounding.
pub mod function;

/// Utility functions for evaluation.
///
/// Argument count checks and shared operand helpers.
pub mod utils;
