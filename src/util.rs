/// Numeric conversion helpers.
///
/// This module provides the conversions between `i64`, `u32` and `f64` that
/// the operations need, together with the bit-level distance used by the
/// approximate equality operator. Lossless conversions return a `Result` or an
/// `Option`; the one deliberate lossy conversion, integer to float widening,
/// is isolated in [`num::i64_to_f64`].
pub mod num;
