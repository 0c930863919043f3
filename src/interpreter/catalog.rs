use crate::token::{Arity, Binding, Operation, Parenthesis, Token, TokenKind};

/// Precedence of prefix `+`, `-`, `!`, `~` and postfix `°`.
pub const UNARY_PRECEDENCE: u8 = 3;
/// Precedence of binary `+` and `-`.
pub const ADDITIVE_PRECEDENCE: u8 = 6;

/// What a catalog symbol turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    /// An operator with fixed metadata.
    Operator(Binding),
    /// An operator whose arity and precedence depend on the previous token.
    /// Only `+` and `-` are registered this way.
    Ambiguous(Operation),
    /// A named function.
    Function(Binding),
    /// `(` or `)`.
    Parenthesis(Parenthesis),
    /// `,`
    Comma,
}

/// A single catalog entry: a surface symbol and its token template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// The symbol as it appears in a normalized expression.
    pub symbol: &'static str,
    /// The template used to build tokens for the symbol.
    pub class:  Class,
}

const fn infix(operation: Operation, precedence: u8) -> Class {
    Class::Operator(Binding { operation,
                              precedence,
                              arity: Arity::Fixed(2),
                              right_associative: false })
}

const fn prefix(operation: Operation) -> Class {
    Class::Operator(Binding { operation,
                              precedence: UNARY_PRECEDENCE,
                              arity: Arity::Fixed(1),
                              right_associative: true })
}

const fn postfix(operation: Operation) -> Class {
    Class::Operator(Binding { operation,
                              precedence: UNARY_PRECEDENCE,
                              arity: Arity::Fixed(1),
                              right_associative: false })
}

const fn function(operation: Operation, arity: Arity) -> Class {
    Class::Function(Binding { operation,
                              precedence: 0,
                              arity,
                              right_associative: false })
}

/// Defines the catalog as a static table of entries, one per
/// `symbol => class` line.
macro_rules! catalog {
    (
        $(
            $symbol:literal => $class:expr
        ),* $(,)?
    ) => {
        /// Every symbol the tokenizer recognizes, with its token template.
        ///
        /// Where one symbol is a prefix of another, the longer one comes
        /// first, so a front-to-back scan finds the longest match.
        pub static CATALOG: &[Entry] = &[
            $(
                Entry { symbol: $symbol, class: $class },
            )*
        ];
    };
}

catalog! {
    "("       => Class::Parenthesis(Parenthesis::Open),
    ")"       => Class::Parenthesis(Parenthesis::Close),
    "=="      => infix(Operation::Equal, 16),
    "!="      => infix(Operation::NotEqual, 16),
    "/="      => infix(Operation::NotEqual, 16),
    "<="      => infix(Operation::LessEqual, 9),
    ">="      => infix(Operation::GreaterEqual, 9),
    "~="      => infix(Operation::ApproxEqual, 16),
    "+"       => Class::Ambiguous(Operation::Plus),
    "-"       => Class::Ambiguous(Operation::Minus),
    "**"      => Class::Operator(Binding { operation:         Operation::Power,
                                           precedence:        5,
                                           arity:             Arity::Fixed(2),
                                           right_associative: true, }),
    "*"       => infix(Operation::Multiply, 5),
    "/"       => infix(Operation::Divide, 5),
    "^"       => infix(Operation::BitwiseXor, 4),
    "%"       => infix(Operation::Modulo, 5),
    "&&"      => infix(Operation::LogicalAnd, 14),
    "||"      => infix(Operation::LogicalOr, 15),
    "<<"      => infix(Operation::ShiftLeft, 7),
    ">>"      => infix(Operation::ShiftRight, 7),
    "°"       => postfix(Operation::Degrees),
    "!"       => prefix(Operation::LogicalNot),
    "~"       => prefix(Operation::BitwiseNot),
    "min"     => function(Operation::Min, Arity::Variadic),
    "max"     => function(Operation::Max, Arity::Variadic),
    "pow"     => function(Operation::Power, Arity::Fixed(2)),
    "mod"     => function(Operation::Modulo, Arity::Fixed(2)),
    "rem"     => function(Operation::Remainder, Arity::Fixed(2)),
    "round"   => function(Operation::Round, Arity::Variadic),
    "acos"    => function(Operation::Acos, Arity::Fixed(1)),
    "asin"    => function(Operation::Asin, Arity::Fixed(1)),
    "atan"    => function(Operation::Atan, Arity::Fixed(1)),
    "abs"     => function(Operation::Abs, Arity::Fixed(1)),
    "ln"      => function(Operation::Ln, Arity::Fixed(1)),
    "log"     => function(Operation::Log, Arity::Variadic),
    "exp"     => function(Operation::Exp, Arity::Fixed(1)),
    "floor"   => function(Operation::Floor, Arity::Variadic),
    "ceiling" => function(Operation::Ceiling, Arity::Variadic),
    "&"       => infix(Operation::BitwiseAnd, 11),
    "|"       => infix(Operation::BitwiseOr, 13),
    "cos"     => function(Operation::Cos, Arity::Fixed(1)),
    "sin"     => function(Operation::Sin, Arity::Fixed(1)),
    "tan"     => function(Operation::Tan, Arity::Fixed(1)),
    "ceil"    => function(Operation::Ceiling, Arity::Variadic),
    "<"       => infix(Operation::Less, 9),
    ">"       => infix(Operation::Greater, 9),
    ","       => Class::Comma,
}

/// Finds the catalog entry for an exact symbol.
///
/// # Example
/// ```
/// use shunt::{
///     interpreter::catalog::{Class, lookup},
///     token::Operation,
/// };
///
/// let entry = lookup("+").unwrap();
/// assert_eq!(entry.class, Class::Ambiguous(Operation::Plus));
/// assert!(lookup("sinh").is_none());
/// ```
#[must_use]
pub fn lookup(symbol: &str) -> Option<&'static Entry> {
    CATALOG.iter().find(|entry| entry.symbol == symbol)
}

/// Decides the arity and precedence of an ambiguous `+` or `-`.
///
/// The operator is binary when the token right before it ends an operand
/// (see [`Token::is_valueish`]), and unary otherwise, including at the start
/// of the expression.
///
/// # Example
/// ```
/// use shunt::{
///     interpreter::catalog::resolve_ambiguous,
///     token::{Arity, Token, TokenKind},
/// };
///
/// let two = Token::new("2", TokenKind::Value, 0);
///
/// assert_eq!(resolve_ambiguous(None), (Arity::Fixed(1), 3));
/// assert_eq!(resolve_ambiguous(Some(&two)), (Arity::Fixed(2), 6));
/// ```
#[must_use]
pub fn resolve_ambiguous(previous: Option<&Token<'_>>) -> (Arity, u8) {
    if previous.is_some_and(Token::is_valueish) {
        (Arity::Fixed(2), ADDITIVE_PRECEDENCE)
    } else {
        (Arity::Fixed(1), UNARY_PRECEDENCE)
    }
}

impl Entry {
    /// Builds the token for this entry at `position`.
    ///
    /// `previous` is the last token emitted before this one and is only
    /// consulted for ambiguous operators.
    #[must_use]
    pub fn token<'a>(&self,
                     text: &'a str,
                     position: usize,
                     previous: Option<&Token<'_>>)
                     -> Token<'a> {
        let kind = match self.class {
            Class::Operator(binding) => TokenKind::Operator(binding),
            Class::Function(binding) => TokenKind::Function(binding),
            Class::Parenthesis(side) => TokenKind::Parenthesis(side),
            Class::Comma => TokenKind::Comma,
            Class::Ambiguous(operation) => {
                let (arity, precedence) = resolve_ambiguous(previous);
                let right_associative = arity == Arity::Fixed(1);
                TokenKind::Operator(Binding { operation,
                                              precedence,
                                              arity,
                                              right_associative })
            },
        };

        Token::new(text, kind, position)
    }
}
