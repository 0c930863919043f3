use std::cmp::Ordering;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
    token::Operation,
    util::num::{i64_to_f64, ulp_distance},
};

/// How many representable floats apart two values may be and still count as
/// approximately equal under `~=`.
pub const APPROX_ULPS: u64 = 4;

/// Evaluates one of `==`, `!=`, `<`, `>`, `<=` and `>=`.
///
/// Operands are widened the way [`Value::compare`] describes. Any comparison
/// involving NaN is false, except `!=`, which is true.
///
/// # Example
/// ```
/// use shunt::{
///     interpreter::{evaluator::binary::comparison::compare, value::core::Value},
///     token::Operation,
/// };
///
/// let r = compare(Operation::Less, &[Value::Integer(2), Value::Float(2.5)]).unwrap();
/// assert_eq!(r, Value::Boolean(true));
///
/// let nan = Value::Float(f64::NAN);
/// assert_eq!(compare(Operation::Equal, &[nan, nan]).unwrap(), Value::Boolean(false));
/// assert_eq!(compare(Operation::NotEqual, &[nan, nan]).unwrap(), Value::Boolean(true));
/// ```
pub fn compare(operation: Operation, args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 2, operation.name())?;
    let ordering = args[0].compare(&args[1]);

    let result = match operation {
        Operation::Equal => ordering == Some(Ordering::Equal),
        Operation::NotEqual => ordering != Some(Ordering::Equal),
        Operation::Less => ordering == Some(Ordering::Less),
        Operation::Greater => ordering == Some(Ordering::Greater),
        Operation::LessEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        Operation::GreaterEqual => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
        _ => {
            return Err(RuntimeError::TypeError { name:    operation.name(),
                                                 details: "not a comparison".into(), });
        },
    };

    Ok(Value::Boolean(result))
}

/// `~=`: equality within [`APPROX_ULPS`] units in the last place.
///
/// When either side is a float both are compared as floats. Otherwise the
/// comparison is exact, with booleans counting as `0` and `1`.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::binary::comparison::approx_equal, value::core::Value};
///
/// let one = 1.0_f64;
/// let near = Value::Float(f64::from_bits(one.to_bits() + 4));
/// let far = Value::Float(f64::from_bits(one.to_bits() + 5));
///
/// assert_eq!(approx_equal(&[Value::Float(one), near]).unwrap(), Value::Boolean(true));
/// assert_eq!(approx_equal(&[Value::Float(one), far]).unwrap(), Value::Boolean(false));
/// assert_eq!(approx_equal(&[Value::Integer(1), Value::Float(one)]).unwrap(),
///            Value::Boolean(true));
/// ```
pub fn approx_equal(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 2, "~=")?;
    let (a, b) = (args[0], args[1]);

    let result = if a.is_float() || b.is_float() {
        let (a, b) = (float_of(a), float_of(b));
        ulp_distance(a, b).is_some_and(|distance| distance <= APPROX_ULPS)
    } else {
        a.equals(&b)
    };

    Ok(Value::Boolean(result))
}

const fn float_of(value: Value) -> f64 {
    match value {
        Value::Integer(n) => i64_to_f64(n),
        Value::Float(r) => r,
        Value::Boolean(b) => i64_to_f64(b as i64),
    }
}
