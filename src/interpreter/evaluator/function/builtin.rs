use crate::interpreter::{
    evaluator::{
        core::EvalResult,
        unary::negate,
        utils::{check_arity, domain_error},
    },
    value::core::Value,
};

/// Reads the single numeric argument of a one-argument function.
fn argument(args: &[Value], name: &'static str) -> EvalResult<f64> {
    check_arity(args, 1, name)?;
    args[0].numeric_f64(name)
}

/// Applies `f` to the single argument and returns a float.
fn float_function(args: &[Value], name: &'static str, f: fn(f64) -> f64) -> EvalResult<Value> {
    Ok(Value::Float(f(argument(args, name)?)))
}

/// Returns the absolute value of a number.
///
/// Integers stay integers; `abs(i64::MIN)` widens to a float.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::function::builtin::abs, value::core::Value};
///
/// assert_eq!(abs(&[Value::Integer(-3)]).unwrap(), Value::Integer(3));
/// assert_eq!(abs(&[Value::Float(-2.5)]).unwrap(), Value::Float(2.5));
/// assert!(abs(&[Value::Boolean(true)]).is_err());
/// ```
pub fn abs(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1, "abs")?;
    match args[0] {
        Value::Integer(n) if n < 0 => negate(&args[0]),
        Value::Integer(_) => Ok(args[0]),
        value => Ok(Value::Float(value.numeric_f64("abs")?.abs())),
    }
}

/// Natural logarithm.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::function::builtin::ln, value::core::Value};
///
/// assert_eq!(ln(&[Value::Integer(1)]).unwrap(), Value::Float(0.0));
/// assert!(ln(&[Value::Integer(0)]).is_err());
/// ```
pub fn ln(args: &[Value]) -> EvalResult<Value> {
    let x = argument(args, "ln")?;
    if x <= 0.0 {
        return Err(domain_error("ln", format!("{x} is not positive")));
    }
    Ok(Value::Float(x.ln()))
}

/// `e` raised to the argument.
pub fn exp(args: &[Value]) -> EvalResult<Value> {
    float_function(args, "exp", f64::exp)
}

/// Sine of an angle in radians.
pub fn sin(args: &[Value]) -> EvalResult<Value> {
    float_function(args, "sin", f64::sin)
}

/// Cosine of an angle in radians.
pub fn cos(args: &[Value]) -> EvalResult<Value> {
    float_function(args, "cos", f64::cos)
}

/// Tangent of an angle in radians.
pub fn tan(args: &[Value]) -> EvalResult<Value> {
    float_function(args, "tan", f64::tan)
}

/// Arcsine, defined on `[-1, 1]`.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::function::builtin::asin, value::core::Value};
///
/// assert_eq!(asin(&[Value::Integer(0)]).unwrap(), Value::Float(0.0));
/// assert!(asin(&[Value::Float(1.5)]).is_err());
/// ```
pub fn asin(args: &[Value]) -> EvalResult<Value> {
    let x = unit_interval(args, "asin")?;
    Ok(Value::Float(x.asin()))
}

/// Arccosine, defined on `[-1, 1]`.
pub fn acos(args: &[Value]) -> EvalResult<Value> {
    let x = unit_interval(args, "acos")?;
    Ok(Value::Float(x.acos()))
}

/// Arctangent.
pub fn atan(args: &[Value]) -> EvalResult<Value> {
    float_function(args, "atan", f64::atan)
}

/// Postfix `°`: converts degrees to radians.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::function::builtin::degrees, value::core::Value};
///
/// assert_eq!(degrees(&[Value::Integer(180)]).unwrap(), Value::Float(std::f64::consts::PI));
/// ```
pub fn degrees(args: &[Value]) -> EvalResult<Value> {
    float_function(args, "°", f64::to_radians)
}

fn unit_interval(args: &[Value], name: &'static str) -> EvalResult<f64> {
    let x = argument(args, name)?;
    if !(-1.0..=1.0).contains(&x) {
        return Err(domain_error(name, format!("{x} is outside [-1, 1]")));
    }
    Ok(x)
}
