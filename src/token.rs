/// Every operation an operator or function token can be bound to.
///
/// The set is closed and known at compile time, so tokens carry one of these
/// identifiers and the evaluator dispatches on it with a `match` (see
/// `interpreter::evaluator::dispatch`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `+`, unary identity or binary addition depending on the operand count.
    Plus,
    /// `-`, unary negation or binary subtraction depending on the operand
    /// count.
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%` and `mod`, truncated modulo.
    Modulo,
    /// `rem`, IEEE remainder.
    Remainder,
    /// `**` and `pow`.
    Power,
    /// `&`
    BitwiseAnd,
    /// `|`
    BitwiseOr,
    /// `^`
    BitwiseXor,
    /// `~`
    BitwiseNot,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
    /// `!`
    LogicalNot,
    /// `==`
    Equal,
    /// `!=` and `/=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `~=`, equality within a few units in the last place.
    ApproxEqual,
    /// `min`
    Min,
    /// `max`
    Max,
    /// `abs`
    Abs,
    /// `ln`
    Ln,
    /// `log`, base 10 or an explicit base.
    Log,
    /// `exp`
    Exp,
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `tan`
    Tan,
    /// `asin`
    Asin,
    /// `acos`
    Acos,
    /// `atan`
    Atan,
    /// Postfix `°`, degrees to radians.
    Degrees,
    /// `round`
    Round,
    /// `floor`
    Floor,
    /// `ceiling` and `ceil`
    Ceiling,
}

impl Operation {
    /// The canonical name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "mod",
            Self::Remainder => "rem",
            Self::Power => "pow",
            Self::BitwiseAnd => "&",
            Self::BitwiseOr => "|",
            Self::BitwiseXor => "^",
            Self::BitwiseNot => "~",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::LogicalNot => "!",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::ApproxEqual => "~=",
            Self::Min => "min",
            Self::Max => "max",
            Self::Abs => "abs",
            Self::Ln => "ln",
            Self::Log => "log",
            Self::Exp => "exp",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Degrees => "°",
            Self::Round => "round",
            Self::Floor => "floor",
            Self::Ceiling => "ceiling",
        }
    }
}

/// How many operands an operator or function consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many operands.
    Fixed(usize),
    /// Decided by context: the argument list of a function call.
    Variadic,
}

/// Operator metadata shared by operator and function tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    /// The operation invoked when the token is evaluated.
    pub operation:         Operation,
    /// Binding strength; a lower number binds tighter. Functions use `0` and
    /// never take part in precedence comparisons.
    pub precedence:        u8,
    /// Operand count.
    pub arity:             Arity,
    /// Whether equal-precedence chains group from the right.
    pub right_associative: bool,
}

/// The two parenthesis tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parenthesis {
    /// `(`
    Open,
    /// `)`
    Close,
}

/// The classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A numeric or boolean literal.
    Value,
    /// A free variable, resolved through the caller's lookup.
    Symbol,
    /// An operator such as `+` or `<<`.
    Operator(Binding),
    /// A named function such as `sin` or `max`.
    Function(Binding),
    /// `(` or `)`.
    Parenthesis(Parenthesis),
    /// `,`
    Comma,
}

/// A lexical token.
///
/// The text borrows from the normalized expression. `position` is the byte
/// offset of the token in that string and is only used for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    text:     &'a str,
    kind:     TokenKind,
    position: usize,
}

impl<'a> Token<'a> {
    /// Creates a token.
    #[must_use]
    pub const fn new(text: &'a str, kind: TokenKind, position: usize) -> Self {
        Self { text,
               kind,
               position }
    }

    /// The token as written.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// The token classification.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Byte offset in the normalized expression.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Operator or function metadata, if the token has any.
    #[must_use]
    pub const fn binding(&self) -> Option<Binding> {
        match self.kind {
            TokenKind::Operator(binding) | TokenKind::Function(binding) => Some(binding),
            _ => None,
        }
    }

    /// Precedence of an operator or function token.
    #[must_use]
    pub const fn precedence(&self) -> Option<u8> {
        match self.binding() {
            Some(binding) => Some(binding.precedence),
            None => None,
        }
    }

    /// Arity of an operator or function token.
    #[must_use]
    pub const fn arity(&self) -> Option<Arity> {
        match self.binding() {
            Some(binding) => Some(binding.arity),
            None => None,
        }
    }

    /// Whether an operator or function token is right-associative. Other
    /// tokens report `false`.
    #[must_use]
    pub const fn right_associative(&self) -> bool {
        match self.binding() {
            Some(binding) => binding.right_associative,
            None => false,
        }
    }

    /// Returns a copy of a function token whose arity is the given argument
    /// count. Other tokens are returned unchanged.
    #[must_use]
    pub const fn with_arity(self, count: usize) -> Self {
        match self.kind {
            TokenKind::Function(binding) => {
                Self { kind: TokenKind::Function(Binding { arity: Arity::Fixed(count),
                                                           ..binding }),
                       ..self }
            },
            _ => self,
        }
    }

    /// Whether this token ends an operand, so that a following `+` or `-` is
    /// binary.
    ///
    /// Exactly values, symbols, closing parentheses and commas qualify. Every
    /// operator, the postfix `°` included, leaves the next `+` or `-` unary.
    #[must_use]
    pub const fn is_valueish(&self) -> bool {
        match self.kind {
            TokenKind::Value
            | TokenKind::Symbol
            | TokenKind::Parenthesis(Parenthesis::Close)
            | TokenKind::Comma => true,
            TokenKind::Operator(_)
            | TokenKind::Function(_)
            | TokenKind::Parenthesis(Parenthesis::Open) => false,
        }
    }

    /// Whether the token is `(`.
    #[must_use]
    pub const fn is_left_parenthesis(&self) -> bool {
        matches!(self.kind, TokenKind::Parenthesis(Parenthesis::Open))
    }

    /// Whether the token is a function name.
    #[must_use]
    pub const fn is_function(&self) -> bool {
        matches!(self.kind, TokenKind::Function(_))
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text)
    }
}
