use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{check_arity, domain_error},
        },
        value::core::Value,
    },
    util::num::{i64_to_f64, i64_to_u32_checked},
};

/// Evaluates an exponentiation, `**` or `pow`.
///
/// - A zero base with a non-positive exponent is undefined.
/// - A negative base with a floating exponent is undefined, even when the
///   exponent happens to be integral.
/// - Integer to a non-negative integer power uses checked arithmetic; a
///   result beyond the `i64` range is returned as a float.
/// - A negative integer exponent yields a float.
/// - Bases `0`, `1` and `-1` stay integers for any positive exponent.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::binary::power::power, value::core::Value};
///
/// let r = power(&[Value::Integer(2), Value::Integer(10)]).unwrap();
/// assert_eq!(r, Value::Integer(1024));
///
/// let r = power(&[Value::Integer(2), Value::Integer(63)]).unwrap();
/// assert_eq!(r, Value::Float(9_223_372_036_854_775_808.0));
///
/// let r = power(&[Value::Integer(2), Value::Integer(-1)]).unwrap();
/// assert_eq!(r, Value::Float(0.5));
///
/// assert!(power(&[Value::Integer(0), Value::Integer(0)]).is_err());
/// assert!(power(&[Value::Float(-2.0), Value::Float(0.5)]).is_err());
/// ```
pub fn power(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 2, "pow")?;

    match (args[0], args[1]) {
        (Value::Boolean(_), _) | (_, Value::Boolean(_)) => {
            Err(RuntimeError::TypeError { name:    "pow",
                                          details: "booleans are not numbers".into(), })
        },
        (Value::Integer(base), Value::Integer(exponent)) => integer_power(base, exponent),
        (base, Value::Integer(exponent)) => {
            let base = base.numeric_f64("pow")?;
            if base == 0.0 && exponent <= 0 {
                return Err(zero_base());
            }
            Ok(Value::Float(base.powf(i64_to_f64(exponent))))
        },
        (base, Value::Float(exponent)) => {
            let base = base.numeric_f64("pow")?;
            if base == 0.0 && exponent <= 0.0 {
                return Err(zero_base());
            }
            if base < 0.0 {
                return Err(domain_error("pow",
                                        "a negative base cannot be raised to a floating exponent"));
            }
            Ok(Value::Float(base.powf(exponent)))
        },
    }
}

fn integer_power(base: i64, exponent: i64) -> EvalResult<Value> {
    if base == 0 && exponent <= 0 {
        return Err(zero_base());
    }

    let widened = || Value::Float(i64_to_f64(base).powf(i64_to_f64(exponent)));

    if exponent < 0 {
        return Ok(widened());
    }

    // Exact for any exponent, including ones beyond `u32`.
    match base {
        0 | 1 => return Ok(Value::Integer(base)),
        -1 => return Ok(Value::Integer(if exponent % 2 == 0 { 1 } else { -1 })),
        _ => {},
    }

    Ok(i64_to_u32_checked(exponent, ()).ok()
                                       .and_then(|exponent| base.checked_pow(exponent))
                                       .map_or_else(widened, Value::Integer))
}

fn zero_base() -> RuntimeError {
    domain_error("pow", "zero cannot be raised to a non-positive power")
}
