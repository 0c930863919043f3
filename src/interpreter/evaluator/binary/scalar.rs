use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::{Promoted, Value},
    },
    util::num::i64_to_f64,
};

/// Promotes the two operands of a binary arithmetic operator.
fn operands(args: &[Value], name: &'static str) -> EvalResult<Promoted> {
    check_arity(args, 2, name)?;
    args[0].promote(&args[1], name)
}

/// Wraps a checked integer result, widening to a float on overflow.
fn integer_or_float(checked: Option<i64>, widened: impl FnOnce() -> f64) -> Value {
    checked.map_or_else(|| Value::Float(widened()), Value::Integer)
}

/// Binary `+`.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::binary::scalar::add, value::core::Value};
///
/// assert_eq!(add(&[Value::Integer(2), Value::Integer(2)]).unwrap(), Value::Integer(4));
/// assert_eq!(add(&[Value::Integer(i64::MAX), Value::Integer(1)]).unwrap(),
///            Value::Float(9_223_372_036_854_775_808.0));
/// ```
pub fn add(args: &[Value]) -> EvalResult<Value> {
    Ok(match operands(args, "+")? {
           Promoted::Integers(a, b) => integer_or_float(a.checked_add(b), || {
                                           i64_to_f64(a) + i64_to_f64(b)
                                       }),
           Promoted::Floats(a, b) => Value::Float(a + b),
       })
}

/// Binary `-`.
pub fn subtract(args: &[Value]) -> EvalResult<Value> {
    Ok(match operands(args, "-")? {
           Promoted::Integers(a, b) => integer_or_float(a.checked_sub(b), || {
                                           i64_to_f64(a) - i64_to_f64(b)
                                       }),
           Promoted::Floats(a, b) => Value::Float(a - b),
       })
}

/// `*`
pub fn multiply(args: &[Value]) -> EvalResult<Value> {
    Ok(match operands(args, "*")? {
           Promoted::Integers(a, b) => integer_or_float(a.checked_mul(b), || {
                                           i64_to_f64(a) * i64_to_f64(b)
                                       }),
           Promoted::Floats(a, b) => Value::Float(a * b),
       })
}

/// `/`
///
/// Integer division truncates toward zero. A divisor that is exactly zero,
/// integer or float, is an error.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::binary::scalar::divide, value::core::Value};
///
/// assert_eq!(divide(&[Value::Integer(7), Value::Integer(2)]).unwrap(), Value::Integer(3));
/// assert_eq!(divide(&[Value::Float(7.0), Value::Integer(2)]).unwrap(), Value::Float(3.5));
/// assert!(divide(&[Value::Integer(1), Value::Integer(0)]).is_err());
/// assert!(divide(&[Value::Float(1.0), Value::Float(0.0)]).is_err());
/// ```
pub fn divide(args: &[Value]) -> EvalResult<Value> {
    Ok(match operands(args, "/")? {
           Promoted::Integers(_, 0) => return Err(RuntimeError::DivisionByZero { name: "/" }),
           Promoted::Integers(a, b) => integer_or_float(a.checked_div(b), || {
                                           i64_to_f64(a) / i64_to_f64(b)
                                       }),
           Promoted::Floats(_, b) if b == 0.0 => {
               return Err(RuntimeError::DivisionByZero { name: "/" });
           },
           Promoted::Floats(a, b) => Value::Float(a / b),
       })
}

/// `%` and `mod`: truncated modulo, the result has the sign of the dividend.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::binary::scalar::modulo, value::core::Value};
///
/// assert_eq!(modulo(&[Value::Integer(-7), Value::Integer(3)]).unwrap(), Value::Integer(-1));
/// assert_eq!(modulo(&[Value::Float(7.5), Value::Integer(2)]).unwrap(), Value::Float(1.5));
/// ```
pub fn modulo(args: &[Value]) -> EvalResult<Value> {
    Ok(match operands(args, "mod")? {
           Promoted::Integers(_, 0) => return Err(RuntimeError::DivisionByZero { name: "mod" }),
           // `i64::MIN % -1` overflows in the quotient only; the remainder is 0.
           Promoted::Integers(a, b) => Value::Integer(a.checked_rem(b).unwrap_or(0)),
           Promoted::Floats(_, b) if b == 0.0 => {
               return Err(RuntimeError::DivisionByZero { name: "mod" });
           },
           Promoted::Floats(a, b) => Value::Float(a % b),
       })
}

/// `rem`: IEEE remainder, `a - n * b` with `n = a / b` rounded to the nearest
/// integer, ties to even. The result lies in `[-|b|/2, |b|/2]`.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::binary::scalar::remainder, value::core::Value};
///
/// assert_eq!(remainder(&[Value::Integer(5), Value::Integer(3)]).unwrap(), Value::Integer(-1));
/// assert_eq!(remainder(&[Value::Integer(7), Value::Integer(2)]).unwrap(), Value::Integer(-1));
/// assert_eq!(remainder(&[Value::Integer(5), Value::Integer(2)]).unwrap(), Value::Integer(1));
/// assert_eq!(remainder(&[Value::Float(5.0), Value::Float(3.0)]).unwrap(), Value::Float(-1.0));
/// ```
pub fn remainder(args: &[Value]) -> EvalResult<Value> {
    Ok(match operands(args, "rem")? {
           Promoted::Integers(_, 0) => return Err(RuntimeError::DivisionByZero { name: "rem" }),
           Promoted::Integers(a, b) => Value::Integer(integer_remainder(a, b)),
           Promoted::Floats(_, b) if b == 0.0 => {
               return Err(RuntimeError::DivisionByZero { name: "rem" });
           },
           Promoted::Floats(a, b) => Value::Float(float_remainder(a, b)),
       })
}

/// IEEE remainder on integers. `b` must not be zero.
#[allow(clippy::cast_possible_truncation)]
fn integer_remainder(a: i64, b: i64) -> i64 {
    let (a, b) = (i128::from(a), i128::from(b));
    let quotient = a / b;
    let mut rest = a % b;
    let twice = 2 * rest.abs();

    if twice > b.abs() || (twice == b.abs() && quotient % 2 != 0) {
        rest -= b.abs() * rest.signum();
    }

    // |rest| <= |b| / 2, so it always fits.
    rest as i64
}

/// IEEE remainder on floats. `b` must not be zero.
fn float_remainder(a: f64, b: f64) -> f64 {
    let rest = a % b;
    let magnitude = b.abs();
    let twice = 2.0 * rest.abs();

    if twice > magnitude || (twice == magnitude && ((a - rest) / b).round() % 2.0 != 0.0) {
        rest - magnitude.copysign(rest)
    } else {
        rest
    }
}
