use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{check_arity_range, domain_error},
        },
        value::core::Value,
    },
    token::Operation,
    util::num::f64_to_i64_exact,
};

/// Evaluates `round`, `floor` or `ceiling`.
///
/// With one argument the value is rounded to an integral number, returned as
/// an integer when it fits and as a float otherwise. Integers are returned
/// unchanged.
///
/// With two arguments, `op(value, scale)` rounds to a multiple of `scale`,
/// computed as `op(value / scale) * scale`. The scale must be positive. The
/// result is an integer if the scale is an integer and the result fits, and a
/// float otherwise.
///
/// `round` rounds half away from zero.
///
/// # Example
/// ```
/// use shunt::{
///     interpreter::{evaluator::function::round::round, value::core::Value},
///     token::Operation,
/// };
///
/// assert_eq!(round(Operation::Round, &[Value::Float(2.5)]).unwrap(), Value::Integer(3));
/// assert_eq!(round(Operation::Floor, &[Value::Float(-2.5)]).unwrap(), Value::Integer(-3));
/// assert_eq!(round(Operation::Round, &[Value::Integer(94), Value::Integer(10)]).unwrap(),
///            Value::Integer(90));
/// assert_eq!(round(Operation::Ceiling, &[Value::Float(1.21), Value::Float(0.5)]).unwrap(),
///            Value::Float(1.5));
///
/// assert!(round(Operation::Round, &[Value::Integer(5), Value::Integer(0)]).is_err());
/// ```
pub fn round(operation: Operation, args: &[Value]) -> EvalResult<Value> {
    let name = operation.name();
    check_arity_range(args, 1, 2, name)?;

    let apply: fn(f64) -> f64 = match operation {
        Operation::Round => f64::round,
        Operation::Floor => f64::floor,
        Operation::Ceiling => f64::ceil,
        _ => {
            return Err(RuntimeError::TypeError { name,
                                                 details: "not a rounding operation".into() });
        },
    };

    match (args[0], args.get(1)) {
        (Value::Integer(n), None) => Ok(Value::Integer(n)),
        (value, None) => Ok(integral(apply(value.numeric_f64(name)?))),
        (value, Some(scale)) => {
            let x = value.numeric_f64(name)?;
            let s = scale.numeric_f64(name)?;
            if s.is_nan() || s <= 0.0 {
                return Err(domain_error(name, format!("scale {s} is not positive")));
            }

            let rounded = apply(x / s) * s;
            Ok(if scale.is_integer() {
                   integral(rounded)
               } else {
                   Value::Float(rounded)
               })
        },
    }
}

fn integral(value: f64) -> Value {
    f64_to_i64_exact(value).map_or(Value::Float(value), Value::Integer)
}
