/// Represents all errors that can occur during tokenizing or parsing.
///
/// Positions are byte offsets into the normalized expression, that is after
/// lowercasing and whitespace removal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A run of characters matched neither the catalog, a numeric literal nor
    /// a variable name.
    #[error("Error at position {position}: Unrecognized input '{text}'.")]
    UnrecognizedInput {
        /// The offending text.
        text:     String,
        /// Where the text starts.
        position: usize,
    },
    /// A value token is not `true`, `false` or a valid number.
    #[error("Invalid literal '{text}'.")]
    InvalidLiteral {
        /// The literal as written.
        text: String,
    },
    /// A closing parenthesis without an opening one, or the other way round.
    #[error("Error at position {position}: Unbalanced parenthesis.")]
    UnbalancedParenthesis {
        /// Position of the parenthesis that could not be matched.
        position: usize,
    },
    /// A comma outside of any parenthesized argument list.
    #[error("Error at position {position}: Comma outside of an argument list.")]
    MisplacedComma {
        /// Position of the comma.
        position: usize,
    },
}
