use tracing::trace;

use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{catalog, value::core::Value},
    token::{Arity, Binding, Token, TokenKind},
};

/// Result type used by the evaluator.
///
/// All operations return either a value of type `T` or a `RuntimeError`
/// describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a postfix token sequence.
///
/// Walks the tokens left to right with an operand stack:
/// - values are parsed and pushed,
/// - symbols are resolved through `lookup` and pushed,
/// - operators and functions pop their operands, in their original left to
///   right order, and push the result of their operation.
///
/// Exactly one value must remain at the end.
///
/// # Errors
/// Errors from `lookup` are returned unchanged. Every other failure is an
/// [`Error`] converted into `E`.
///
/// # Example
/// ```
/// use shunt::{
///     Error,
///     interpreter::{
///         evaluator::core::evaluate_postfix, lexer::tokenize, parser::core::parse,
///         value::core::Value,
///     },
/// };
///
/// let postfix = parse(&tokenize("x*2+1").unwrap()).unwrap();
/// let value = evaluate_postfix(&postfix, |_| Ok::<_, Error>(Value::Integer(20))).unwrap();
///
/// assert_eq!(value, Value::Integer(41));
/// ```
pub fn evaluate_postfix<F, E>(postfix: &[Token<'_>], mut lookup: F) -> Result<Value, E>
    where F: FnMut(&str) -> Result<Value, E>,
          E: From<Error>
{
    let mut stack: Vec<Value> = Vec::with_capacity(postfix.len());

    for token in postfix {
        let value = match token.kind() {
            TokenKind::Value => Value::from_literal(token.text()).map_err(into_caller::<E, _>)?,
            TokenKind::Symbol => lookup(token.text())?,
            TokenKind::Operator(binding) | TokenKind::Function(binding) => {
                apply_binding(token, binding, &mut stack).map_err(into_caller::<E, _>)?
            },
            TokenKind::Parenthesis(_) => {
                return Err(into_caller(ParseError::UnbalancedParenthesis { position:
                                                                               token.position(), }));
            },
            TokenKind::Comma => {
                return Err(into_caller(ParseError::MisplacedComma { position: token.position() }));
            },
        };

        trace!(token = token.text(), %value, depth = stack.len() + 1, "push");
        stack.push(value);
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(into_caller(RuntimeError::UnbalancedExpression { remaining: stack.len() })),
    }
}

/// Pops the operands of an operator or function and applies its operation.
///
/// Errors name the symbol as written, not the operation's canonical name.
fn apply_binding(token: &Token<'_>, binding: Binding, stack: &mut Vec<Value>) -> EvalResult<Value> {
    let Arity::Fixed(needed) = binding.arity else {
        return Err(RuntimeError::ArgumentCountMismatch { name:     binding.operation.name(),
                                                         found:    0,
                                                         expected: "a parenthesized argument list".into(), });
    };

    let available = stack.len();
    let start = available.checked_sub(needed)
                         .ok_or_else(|| RuntimeError::MissingOperand { name: token.text().to_string(),
                                                                       needed,
                                                                       available })?;
    let args = stack.split_off(start);

    binding.operation.apply(&args).map_err(|error| match catalog::lookup(token.text()) {
                                      Some(entry) => error.renamed(entry.symbol),
                                      None => error,
                                  })
}

/// Lifts a pipeline error into the caller's error type.
fn into_caller<E: From<Error>, T: Into<Error>>(error: T) -> E {
    let error: Error = error.into();
    E::from(error)
}
