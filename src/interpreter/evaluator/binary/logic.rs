use crate::interpreter::{
    evaluator::{
        core::EvalResult,
        utils::{boolean_operand, check_arity},
    },
    value::core::Value,
};

fn operands(args: &[Value], name: &'static str) -> EvalResult<(bool, bool)> {
    check_arity(args, 2, name)?;
    Ok((boolean_operand(&args[0], name)?, boolean_operand(&args[1], name)?))
}

/// `&&`
///
/// Both operands are already evaluated, so there is no short circuit.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::binary::logic::and, value::core::Value};
///
/// let r = and(&[Value::Boolean(true), Value::Boolean(false)]).unwrap();
/// assert_eq!(r, Value::Boolean(false));
///
/// assert!(and(&[Value::Integer(1), Value::Boolean(true)]).is_err());
/// ```
pub fn and(args: &[Value]) -> EvalResult<Value> {
    let (a, b) = operands(args, "&&")?;
    Ok(Value::Boolean(a && b))
}

/// `||`
pub fn or(args: &[Value]) -> EvalResult<Value> {
    let (a, b) = operands(args, "||")?;
    Ok(Value::Boolean(a || b))
}
