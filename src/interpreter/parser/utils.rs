use crate::token::Token;

/// Decides whether the operator on top of the stack must be moved to the
/// output before `incoming` is pushed.
///
/// Only operators are popped this way; parentheses and functions stay on the
/// stack until a closing parenthesis. An operator is popped when it binds
/// tighter than the incoming one (a smaller precedence number), or equally
/// tight while the incoming operator is left-associative.
///
/// # Example
/// ```
/// use shunt::interpreter::{lexer::tokenize, parser::utils::should_pop};
///
/// let tokens = tokenize("2*3+4").unwrap();
/// let (times, plus) = (&tokens[1], &tokens[3]);
///
/// assert!(should_pop(plus, times));
/// assert!(!should_pop(times, plus));
/// ```
#[must_use]
pub fn should_pop(incoming: &Token<'_>, top: &Token<'_>) -> bool {
    if top.is_left_parenthesis() || top.is_function() {
        return false;
    }

    match (top.precedence(), incoming.precedence()) {
        (Some(top_precedence), Some(incoming_precedence)) => {
            top_precedence < incoming_precedence
            || (top_precedence == incoming_precedence && !incoming.right_associative())
        },
        _ => false,
    }
}

/// Counts the arguments inside one pair of parentheses.
///
/// One frame is opened per `(`. A comma starts a new argument; any other
/// token marks the frame as non-empty, so `f()` has zero arguments and
/// `f(a, b)` has two.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentFrame {
    commas:      usize,
    has_content: bool,
}

impl ArgumentFrame {
    /// Records a comma.
    pub const fn comma(&mut self) {
        self.commas += 1;
        self.has_content = true;
    }

    /// Records any token other than a comma.
    pub const fn content(&mut self) {
        self.has_content = true;
    }

    /// The number of arguments seen.
    #[must_use]
    pub const fn count(&self) -> usize {
        if self.has_content { self.commas + 1 } else { 0 }
    }
}
