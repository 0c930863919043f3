//! # shunt
//!
//! shunt is an arithmetic expression evaluator written in Rust.
//! It tokenizes a formula, reorders it with the shunting-yard algorithm and
//! evaluates the result over integers, floats and booleans, resolving free
//! variables through a caller supplied lookup.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing or evaluating an expression. Every error carries enough detail to
/// tell the user what went wrong and, for parse errors, where.
///
/// # Responsibilities
/// - Defines error enums for both pipeline phases.
/// - Combines them into a single [`Error`] that callers can absorb into their
///   own error types.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together the token catalog, the lexer, the parser, the
/// evaluator and the value representation.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides the individual pipeline stages as public functions.
pub mod interpreter;
/// Tokens and the operator metadata they carry.
pub mod token;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Convert between `i64`, `u32` and `f64` without silent data loss.
/// - Measure the distance between floats in units in the last place.
pub mod util;

pub use error::{Error, ParseError, RuntimeError};
pub use interpreter::{
    evaluator::core::evaluate_postfix,
    lexer::{preprocess, tokenize},
    parser::core::parse,
    value::core::Value,
};
pub use token::Token;

/// Evaluates an expression.
///
/// The expression is normalized, tokenized, reordered into postfix order and
/// evaluated. Every free variable is resolved by calling `lookup` with its
/// name.
///
/// The error type is chosen by the caller. Errors returned by `lookup` are
/// passed through unchanged, and pipeline errors are converted with
/// `From<Error>`.
///
/// # Errors
/// Returns an error if the expression cannot be tokenized or parsed, if an
/// operation fails, or if `lookup` fails.
///
/// # Examples
/// ```
/// use shunt::{Error, Value, evaluate, no_variables};
///
/// assert_eq!(evaluate("2 + 3 * 4", no_variables).unwrap(), Value::Integer(14));
/// assert_eq!(evaluate("max(1, 2.5)", no_variables).unwrap(), Value::Float(2.5));
///
/// let area = evaluate("Pi * r ** 2", |name| match name {
///                        "pi" => Ok::<_, Error>(Value::Float(3.0)),
///                        _ => Ok(Value::Integer(2)),
///                    }).unwrap();
/// assert_eq!(area, Value::Float(12.0));
///
/// // Variables are unknown unless the lookup knows them.
/// assert!(evaluate("x + 1", no_variables).is_err());
/// ```
pub fn evaluate<F, E>(expression: &str, lookup: F) -> Result<Value, E>
    where F: FnMut(&str) -> Result<Value, E>,
          E: From<Error>
{
    let normalized = preprocess(expression);
    debug!(expression, %normalized, "evaluating");

    let tokens = tokenize(&normalized).map_err(|e| E::from(Error::from(e)))?;
    let postfix = parse(&tokens).map_err(|e| E::from(Error::from(e)))?;
    let value = evaluate_postfix(&postfix, lookup)?;

    debug!(%value, "evaluated");
    Ok(value)
}

/// A lookup that knows no variables.
///
/// # Errors
/// Always returns [`RuntimeError::UnknownVariable`].
pub fn no_variables(name: &str) -> Result<Value, Error> {
    Err(RuntimeError::UnknownVariable { name: name.to_string() }.into())
}
