/// The shunting-yard conversion from infix tokens to postfix order.
///
/// Contains the main parse loop and the per-token rules for operators,
/// commas and parentheses.
pub mod core;

/// Helper predicates and the argument counter used by the parser.
pub mod utils;
