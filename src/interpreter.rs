/// The catalog of every operator and function symbol.
///
/// The catalog is a static table built at compile time. It maps each surface
/// symbol to the template of the token it produces: an operator with its
/// precedence, arity and associativity, a named function, a parenthesis or
/// the comma.
///
/// # Responsibilities
/// - Lists every recognized symbol in a single place.
/// - Resolves `+` and `-` to their unary or binary form from context.
pub mod catalog;
/// The evaluator module computes the value of a postfix token sequence.
///
/// The evaluator walks the postfix sequence with an operand stack, resolving
/// variables through the caller's lookup and applying each operation to the
/// operands it pops.
///
/// # Responsibilities
/// - Applies every operation in the catalog to integers, floats and booleans.
/// - Validates operand counts and operand types.
/// - Reports runtime errors such as division by zero or domain errors.
pub mod evaluator;
/// The lexer module tokenizes a normalized expression.
///
/// The lexer reads the text produced by [`lexer::preprocess`] and emits
/// tokens for catalog symbols, numeric and boolean literals, and variable
/// names. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Normalizes case and whitespace.
/// - Splits the text into tokens with their byte positions.
/// - Reports lexical errors for unrecognized input.
pub mod lexer;
/// The parser module reorders tokens into postfix order.
///
/// The parser runs the shunting-yard algorithm over the token stream. The
/// result contains no parentheses or commas, and every function call carries
/// the number of arguments it was given.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are 64 bit integers, double precision floats and booleans. The
/// module also implements literal parsing, numeric promotion and the widened
/// comparisons used by the comparison operators.
pub mod value;
