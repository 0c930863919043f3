/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing an expression,
/// converting it to postfix order, or reading a literal. Parse errors are
/// detected before any operation is applied.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while a postfix sequence is
/// evaluated: wrong argument counts, operand types that an operation does not
/// accept, mathematically undefined inputs and malformed operand stacks.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced by the evaluation pipeline.
///
/// [`evaluate`](crate::evaluate) is generic over its error type so that a
/// caller's lookup error can pass through untouched; the only requirement is
/// that the caller's type can absorb this one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The expression could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression parsed but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
