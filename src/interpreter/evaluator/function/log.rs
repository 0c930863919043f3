use crate::interpreter::{
    evaluator::{
        core::EvalResult,
        utils::{check_arity_range, domain_error},
    },
    value::core::Value,
};

/// Computes a logarithm.
///
/// `log(x)` is the base 10 logarithm. `log(x, base)` is `ln x / ln base`.
///
/// # Errors
/// - `DomainError` if `x` or `base` is not positive, or `base` is `1`.
/// - `TypeError` for boolean arguments.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::function::log::log, value::core::Value};
///
/// assert_eq!(log(&[Value::Integer(1000)]).unwrap(), Value::Float(3.0));
/// assert_eq!(log(&[Value::Integer(8), Value::Integer(2)]).unwrap(), Value::Float(3.0));
///
/// assert!(log(&[Value::Integer(0)]).is_err());
/// assert!(log(&[Value::Integer(8), Value::Integer(1)]).is_err());
/// ```
pub fn log(args: &[Value]) -> EvalResult<Value> {
    check_arity_range(args, 1, 2, "log")?;

    let x = args[0].numeric_f64("log")?;
    if x <= 0.0 {
        return Err(domain_error("log", format!("{x} is not positive")));
    }

    let Some(base) = args.get(1) else {
        return Ok(Value::Float(x.log10()));
    };

    let base = base.numeric_f64("log")?;
    if base <= 0.0 || base == 1.0 {
        return Err(domain_error("log", format!("{base} is not a valid base")));
    }

    Ok(Value::Float(x.ln() / base.ln()))
}
