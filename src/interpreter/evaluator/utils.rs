use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Checks that the number of arguments matches `expected`.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::utils::check_arity, value::core::Value};
///
/// let args = [Value::Integer(2), Value::Integer(1)];
///
/// assert!(check_arity(&args, 2, "+").is_ok());
/// assert!(check_arity(&args, 1, "abs").is_err());
/// ```
pub fn check_arity<T>(args: &[T], expected: usize, name: &'static str) -> EvalResult<()> {
    check_arity_range(args, expected, expected, name)
}

/// Checks that the number of arguments lies in `min..=max`.
///
/// Pass `usize::MAX` as `max` for an open upper bound.
pub fn check_arity_range<T>(args: &[T],
                            min: usize,
                            max: usize,
                            name: &'static str)
                            -> EvalResult<()> {
    if (min..=max).contains(&args.len()) {
        return Ok(());
    }

    let expected = match (min, max) {
        (min, max) if min == max => min.to_string(),
        (min, usize::MAX) => format!("at least {min}"),
        (min, max) if max == min + 1 => format!("{min} or {max}"),
        (min, max) => format!("{min} to {max}"),
    };

    Err(RuntimeError::ArgumentCountMismatch { name,
                                              found: args.len(),
                                              expected })
}

/// Reads an operand that must be an integer.
///
/// Floats and booleans are rejected with a `TypeError`, which is what the
/// bitwise operators require.
pub fn integer_operand(value: &Value, name: &'static str) -> EvalResult<i64> {
    match value {
        Value::Integer(n) => Ok(*n),
        Value::Float(_) | Value::Boolean(_) => {
            Err(RuntimeError::TypeError { name,
                                          details: format!("expected an integer, found {}",
                                                           value.type_name()) })
        },
    }
}

/// Reads an operand that must be a boolean.
pub fn boolean_operand(value: &Value, name: &'static str) -> EvalResult<bool> {
    match value {
        Value::Boolean(b) => Ok(*b),
        Value::Integer(_) | Value::Float(_) => {
            Err(RuntimeError::TypeError { name,
                                          details: format!("expected a boolean, found {}",
                                                           value.type_name()) })
        },
    }
}

/// Builds a `DomainError` for `name`.
pub fn domain_error(name: &'static str, details: impl Into<String>) -> RuntimeError {
    RuntimeError::DomainError { name,
                                details: details.into() }
}
