/// Smallest `f64` strictly greater than every `i64` (`2^63`).
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Widens an integer to a float.
///
/// This is the promotion applied whenever an integer meets a float. Integers
/// beyond `2^53` round to the nearest representable float, exactly as a
/// numeric cast does.
///
/// ## Example
/// ```
/// use shunt::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(i64::MAX), 9_223_372_036_854_775_807.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts an `f64` to `i64` if and only if it is integral and in range.
///
/// ## Returns
/// - `Some(i64)`: The exact integer value.
/// - `None`: If the value is fractional, non-finite, or outside the `i64`
///   range.
///
/// ## Example
/// ```
/// use shunt::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(90.0), Some(90));
/// assert_eq!(f64_to_i64_exact(-3.0), Some(-3));
/// assert_eq!(f64_to_i64_exact(2.5), None);
/// assert_eq!(f64_to_i64_exact(1e19), None);
/// assert_eq!(f64_to_i64_exact(f64::NAN), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value >= -I64_UPPER_BOUND
       && value < I64_UPPER_BOUND
    {
        Some(value as i64)
    } else {
        None
    }
}

/// Converts an `i64` to `u32` if it fits, otherwise returns `error`.
///
/// Used for exponents and shift amounts, which the standard library takes as
/// `u32`.
///
/// ## Example
/// ```
/// use shunt::util::num::i64_to_u32_checked;
///
/// assert_eq!(i64_to_u32_checked(5, "bad"), Ok(5));
/// assert_eq!(i64_to_u32_checked(-1, "bad"), Err("bad"));
/// assert_eq!(i64_to_u32_checked(i64::MAX, "bad"), Err("bad"));
/// ```
pub fn i64_to_u32_checked<E>(value: i64, error: E) -> Result<u32, E> {
    u32::try_from(value).map_err(|_| error)
}

/// Maps the bit pattern of a float onto a signed integer line on which
/// adjacent floats are adjacent integers.
///
/// Negative floats are stored as sign and magnitude, so their bits are
/// reflected around zero. `-0.0` and `0.0` both map to `0`.
const fn ordered_bits(value: f64) -> i64 {
    let bits = value.to_bits().cast_signed();
    if bits < 0 { i64::MIN - bits } else { bits }
}

/// Counts the representable floats between `a` and `b`.
///
/// Returns `None` if either side is NaN, since NaN has no position on the
/// number line.
///
/// ## Example
/// ```
/// use shunt::util::num::ulp_distance;
///
/// let one = 1.0_f64;
/// let next = f64::from_bits(one.to_bits() + 3);
///
/// assert_eq!(ulp_distance(one, one), Some(0));
/// assert_eq!(ulp_distance(one, next), Some(3));
/// assert_eq!(ulp_distance(next, one), Some(3));
/// assert_eq!(ulp_distance(0.0, -0.0), Some(0));
/// assert_eq!(ulp_distance(f64::NAN, 1.0), None);
/// ```
#[must_use]
pub fn ulp_distance(a: f64, b: f64) -> Option<u64> {
    if a.is_nan() || b.is_nan() {
        return None;
    }

    let distance = (i128::from(ordered_bits(a)) - i128::from(ordered_bits(b))).unsigned_abs();
    Some(u64::try_from(distance).unwrap_or(u64::MAX))
}
