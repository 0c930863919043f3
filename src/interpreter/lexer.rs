use logos::Logos;
use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::catalog,
    token::{Token, TokenKind},
};

/// Represents a raw lexeme in a normalized expression.
///
/// Every catalog symbol is a single `Catalogued` lexeme; its meaning is looked
/// up in [`catalog::CATALOG`] afterwards. The lexer always takes the longest
/// match, and a catalog symbol beats a variable name of the same length.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Lexeme {
    /// Operators, functions, parentheses and the comma.
    #[token("(")]
    #[token(")")]
    #[token("==")]
    #[token("!=")]
    #[token("/=")]
    #[token("<=")]
    #[token(">=")]
    #[token("~=")]
    #[token("+")]
    #[token("-")]
    #[token("**")]
    #[token("*")]
    #[token("/")]
    #[token("^")]
    #[token("%")]
    #[token("&&")]
    #[token("||")]
    #[token("<<")]
    #[token(">>")]
    #[token("°")]
    #[token("!")]
    #[token("~")]
    #[token("min")]
    #[token("max")]
    #[token("pow")]
    #[token("mod")]
    #[token("rem")]
    #[token("round")]
    #[token("acos")]
    #[token("asin")]
    #[token("atan")]
    #[token("abs")]
    #[token("ln")]
    #[token("log")]
    #[token("exp")]
    #[token("floor")]
    #[token("ceiling")]
    #[token("&")]
    #[token("|")]
    #[token("cos")]
    #[token("sin")]
    #[token("tan")]
    #[token("ceil")]
    #[token("<")]
    #[token(">")]
    #[token(",")]
    Catalogued,
    /// Numeric literal runs, such as `42`, `.5`, `2.10` or `1e-3`. A sign
    /// right after `e` belongs to the literal.
    #[regex(r"[0-9.]([0-9.]|e[+-]?)*")]
    Number,
    /// `true` and `false`.
    #[token("true")]
    #[token("false")]
    Boolean,
    /// Free variable names such as `x`, `rate.max` or `v[2]`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_.\[\]]*")]
    Identifier,
}

/// Normalizes an expression before tokenizing.
///
/// Lowercases all letters and removes all whitespace. Applying it twice gives
/// the same result as applying it once.
///
/// # Example
/// ```
/// use shunt::interpreter::lexer::preprocess;
///
/// assert_eq!(preprocess(" tE s t"), "test");
/// assert_eq!(preprocess("Sin( X ) + 2"), "sin(x)+2");
/// ```
#[must_use]
pub fn preprocess(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Converts a normalized expression into tokens.
///
/// Ambiguous `+` and `-` receive their arity and precedence here, from the
/// token emitted right before them.
///
/// # Errors
/// Returns `ParseError::UnrecognizedInput` for any text that is neither a
/// catalog symbol, a literal, nor a variable name.
///
/// # Example
/// ```
/// use shunt::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("sin(2.10*3)^2").unwrap();
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
///
/// assert_eq!(texts, ["sin", "(", "2.10", "*", "3", ")", "^", "2"]);
/// assert!(tokenize("2 $ 3").is_err());
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let mut tokens: Vec<Token<'_>> = Vec::new();
    let mut lexer = Lexeme::lexer(text);

    while let Some(lexeme) = lexer.next() {
        let slice = lexer.slice();
        let position = lexer.span().start;
        let unrecognized = || ParseError::UnrecognizedInput { text: slice.to_string(),
                                                              position };

        let token = match lexeme {
            Ok(Lexeme::Number | Lexeme::Boolean) => Token::new(slice, TokenKind::Value, position),
            Ok(Lexeme::Identifier) => Token::new(slice, TokenKind::Symbol, position),
            Ok(Lexeme::Catalogued) => {
                catalog::lookup(slice).ok_or_else(unrecognized)?
                                      .token(slice, position, tokens.last())
            },
            Err(()) => return Err(unrecognized()),
        };

        trace!(token = token.text(), position, kind = ?token.kind(), "token");
        tokens.push(token);
    }

    Ok(tokens)
}
