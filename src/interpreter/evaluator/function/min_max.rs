use crate::{
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity_range},
        value::core::{Promoted, Value},
    },
    token::Operation,
};

/// Returns the minimum or maximum of two or more arguments.
///
/// The result is a float if any argument is a float, otherwise an integer.
/// Booleans are rejected. A NaN argument is skipped unless every argument is
/// NaN.
///
/// # Example
/// ```
/// use shunt::{
///     interpreter::{evaluator::function::min_max::min_max, value::core::Value},
///     token::Operation,
/// };
///
/// let args = [Value::Integer(3), Value::Integer(9), Value::Integer(-1)];
/// assert_eq!(min_max(Operation::Max, &args).unwrap(), Value::Integer(9));
/// assert_eq!(min_max(Operation::Min, &args).unwrap(), Value::Integer(-1));
///
/// let mixed = [Value::Integer(3), Value::Float(2.5)];
/// assert_eq!(min_max(Operation::Max, &mixed).unwrap(), Value::Float(3.0));
///
/// assert!(min_max(Operation::Max, &[Value::Integer(1)]).is_err());
/// ```
pub fn min_max(operation: Operation, args: &[Value]) -> EvalResult<Value> {
    let name = operation.name();
    check_arity_range(args, 2, usize::MAX, name)?;

    let pick = |promoted: Promoted| match (operation, promoted) {
        (Operation::Min, Promoted::Integers(a, b)) => Value::Integer(a.min(b)),
        (_, Promoted::Integers(a, b)) => Value::Integer(a.max(b)),
        (Operation::Min, Promoted::Floats(a, b)) => Value::Float(a.min(b)),
        (_, Promoted::Floats(a, b)) => Value::Float(a.max(b)),
    };

    // Every argument meets `promote`, which rejects booleans.
    args[1..].iter()
             .try_fold(args[0], |acc, value| acc.promote(value, name).map(pick))
}
