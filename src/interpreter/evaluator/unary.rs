use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{boolean_operand, check_arity, integer_operand},
        },
        value::core::Value,
    },
    util::num::i64_to_f64,
};

/// Unary `+`: returns a numeric operand unchanged.
///
/// Booleans are rejected.
pub fn identity(value: &Value) -> EvalResult<Value> {
    match value {
        Value::Integer(_) | Value::Float(_) => Ok(*value),
        Value::Boolean(_) => Err(not_a_number("+")),
    }
}

/// Unary `-`: negates a numeric operand.
///
/// Negating `i64::MIN` does not fit an integer and yields a float.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::unary::negate, value::core::Value};
///
/// assert_eq!(negate(&Value::Integer(4)).unwrap(), Value::Integer(-4));
/// assert_eq!(negate(&Value::Float(0.5)).unwrap(), Value::Float(-0.5));
/// assert_eq!(negate(&Value::Integer(i64::MIN)).unwrap(),
///            Value::Float(9_223_372_036_854_775_808.0));
/// assert!(negate(&Value::Boolean(true)).is_err());
/// ```
pub fn negate(value: &Value) -> EvalResult<Value> {
    match value {
        Value::Integer(n) => Ok(n.checked_neg()
                                 .map_or_else(|| Value::Float(-i64_to_f64(*n)), Value::Integer)),
        Value::Float(r) => Ok(Value::Float(-r)),
        Value::Boolean(_) => Err(not_a_number("-")),
    }
}

/// `!`: logical negation of a boolean.
pub fn logical_not(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1, "!")?;
    Ok(Value::Boolean(!boolean_operand(&args[0], "!")?))
}

/// `~`: bitwise complement of an integer.
pub fn bitwise_not(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1, "~")?;
    Ok(Value::Integer(!integer_operand(&args[0], "~")?))
}

fn not_a_number(name: &'static str) -> RuntimeError {
    RuntimeError::TypeError { name,
                              details: "booleans are not numbers".into() }
}
