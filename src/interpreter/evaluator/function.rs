/// Built-in single argument functions.
///
/// `abs`, `ln`, `exp`, the trigonometric functions and degree conversion.
pub mod builtin;
/// Logarithm with base 10 or an explicit base.
pub mod log;
/// `min` and `max` function implementations.
///
/// Returns the minimum or maximum of two or more arguments.
pub mod min_max;
/// `round`, `floor` and `ceiling`, optionally to a multiple of a scale.
pub mod round;
