use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{check_arity, domain_error, integer_operand},
        },
        value::core::Value,
    },
    util::num::i64_to_u32_checked,
};

/// Reads the two integer operands of a bitwise operator.
fn operands(args: &[Value], name: &'static str) -> EvalResult<(i64, i64)> {
    check_arity(args, 2, name)?;
    Ok((integer_operand(&args[0], name)?, integer_operand(&args[1], name)?))
}

/// `&`
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::binary::bitwise::and, value::core::Value};
///
/// assert_eq!(and(&[Value::Integer(12), Value::Integer(10)]).unwrap(), Value::Integer(8));
/// assert!(and(&[Value::Float(12.0), Value::Integer(10)]).is_err());
/// ```
pub fn and(args: &[Value]) -> EvalResult<Value> {
    let (a, b) = operands(args, "&")?;
    Ok(Value::Integer(a & b))
}

/// `|`
pub fn or(args: &[Value]) -> EvalResult<Value> {
    let (a, b) = operands(args, "|")?;
    Ok(Value::Integer(a | b))
}

/// `^`
pub fn xor(args: &[Value]) -> EvalResult<Value> {
    let (a, b) = operands(args, "^")?;
    Ok(Value::Integer(a ^ b))
}

/// `<<`
///
/// The shift amount must lie in `0..64`.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::binary::bitwise::shift_left, value::core::Value};
///
/// assert_eq!(shift_left(&[Value::Integer(1), Value::Integer(4)]).unwrap(),
///            Value::Integer(16));
/// assert!(shift_left(&[Value::Integer(1), Value::Integer(64)]).is_err());
/// assert!(shift_left(&[Value::Integer(1), Value::Integer(-1)]).is_err());
/// ```
pub fn shift_left(args: &[Value]) -> EvalResult<Value> {
    let (a, b) = operands(args, "<<")?;
    let amount = shift_amount(b, "<<")?;
    a.checked_shl(amount)
     .map(Value::Integer)
     .ok_or_else(|| out_of_range("<<", b))
}

/// `>>`, an arithmetic shift that keeps the sign.
pub fn shift_right(args: &[Value]) -> EvalResult<Value> {
    let (a, b) = operands(args, ">>")?;
    let amount = shift_amount(b, ">>")?;
    a.checked_shr(amount)
     .map(Value::Integer)
     .ok_or_else(|| out_of_range(">>", b))
}

fn shift_amount(amount: i64, name: &'static str) -> EvalResult<u32> {
    i64_to_u32_checked(amount, out_of_range(name, amount))
}

fn out_of_range(name: &'static str, amount: i64) -> RuntimeError {
    domain_error(name, format!("shift amount {amount} is outside 0..64"))
}
