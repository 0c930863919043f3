/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// An operation received a number of operands it does not accept.
    #[error("Argument count mismatch for '{name}': found {found}, expected {expected}.")]
    ArgumentCountMismatch {
        /// The operator or function name.
        name:     &'static str,
        /// How many operands were supplied.
        found:    usize,
        /// Human readable description of the accepted counts.
        expected: String,
    },
    /// An operand had a representation the operation does not accept.
    #[error("Type error in '{name}': {details}.")]
    TypeError {
        /// The operator or function name.
        name:    &'static str,
        /// What was wrong with the operand.
        details: String,
    },
    /// The operation is mathematically undefined for the given operands.
    #[error("Domain error in '{name}': {details}.")]
    DomainError {
        /// The operator or function name.
        name:    &'static str,
        /// Why the input is outside the domain.
        details: String,
    },
    /// Attempted division by an exact zero.
    #[error("Division by zero in '{name}'.")]
    DivisionByZero {
        /// The operator or function name.
        name: &'static str,
    },
    /// An operator needed more operands than the stack held.
    #[error("Missing operand for '{name}': needs {needed}, found {available}.")]
    MissingOperand {
        /// The operator or function text.
        name:      String,
        /// How many operands the operator consumes.
        needed:    usize,
        /// How many were on the stack.
        available: usize,
    },
    /// Evaluation finished with zero or several values on the stack.
    #[error("Expression left {remaining} values instead of exactly one.")]
    UnbalancedExpression {
        /// The number of values left on the stack.
        remaining: usize,
    },
    /// A variable could not be resolved.
    #[error("Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
}

impl RuntimeError {
    /// Replaces the operator or function name an error reports.
    ///
    /// Operations report their canonical name; the evaluator uses this to
    /// name the symbol as it was written instead, so `7 % 0` mentions `%` and
    /// `mod(7, 0)` mentions `mod`.
    ///
    /// # Example
    /// ```
    /// use shunt::RuntimeError;
    ///
    /// let error = RuntimeError::DivisionByZero { name: "mod" }.renamed("%");
    /// assert_eq!(error, RuntimeError::DivisionByZero { name: "%" });
    /// ```
    #[must_use]
    pub fn renamed(self, symbol: &'static str) -> Self {
        match self {
            Self::ArgumentCountMismatch { found, expected, .. } => {
                Self::ArgumentCountMismatch { name: symbol,
                                              found,
                                              expected }
            },
            Self::TypeError { details, .. } => Self::TypeError { name: symbol,
                                                                 details },
            Self::DomainError { details, .. } => Self::DomainError { name: symbol,
                                                                     details },
            Self::DivisionByZero { .. } => Self::DivisionByZero { name: symbol },
            other => other,
        }
    }
}
