use tracing::debug;

use crate::{
    error::ParseError,
    interpreter::parser::utils::{ArgumentFrame, should_pop},
    token::{Parenthesis, Token, TokenKind},
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Converts infix tokens into postfix order with the shunting-yard
/// algorithm.
///
/// Parentheses and commas are consumed; every function in the output carries
/// the number of arguments it was called with.
///
/// # Errors
/// - `UnbalancedParenthesis` if a `)` has no matching `(`, or a `(` is never
///   closed.
/// - `MisplacedComma` if a comma appears outside of any parentheses.
///
/// # Example
/// ```
/// use shunt::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("sin(2.10*3)^2").unwrap();
/// let postfix = parse(&tokens).unwrap();
/// let texts: Vec<&str> = postfix.iter().map(|t| t.text()).collect();
///
/// assert_eq!(texts, ["2.10", "3", "*", "sin", "2", "^"]);
/// ```
pub fn parse<'a>(tokens: &[Token<'a>]) -> ParseResult<Vec<Token<'a>>> {
    let mut stack: Vec<Token<'a>> = Vec::new();
    let mut frames: Vec<ArgumentFrame> = Vec::new();
    let mut output = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token.kind() {
            TokenKind::Value | TokenKind::Symbol => {
                mark_content(&mut frames);
                output.push(*token);
            },
            TokenKind::Function(_) => {
                mark_content(&mut frames);
                stack.push(*token);
            },
            TokenKind::Operator(_) => {
                mark_content(&mut frames);
                process_operator(*token, &mut stack, &mut output);
            },
            TokenKind::Comma => process_comma(token, &mut stack, &mut output, &mut frames)?,
            TokenKind::Parenthesis(Parenthesis::Open) => {
                mark_content(&mut frames);
                stack.push(*token);
                frames.push(ArgumentFrame::default());
            },
            TokenKind::Parenthesis(Parenthesis::Close) => {
                process_right_parenthesis(token, &mut stack, &mut output, &mut frames)?;
            },
        }
    }

    while let Some(top) = stack.pop() {
        if top.is_left_parenthesis() {
            return Err(ParseError::UnbalancedParenthesis { position: top.position() });
        }
        output.push(top);
    }

    debug!(postfix = %display_tokens(&output), "parsed expression");
    Ok(output)
}

/// Pops every operator that binds at least as tight as `token`, then pushes
/// `token`.
fn process_operator<'a>(token: Token<'a>, stack: &mut Vec<Token<'a>>, output: &mut Vec<Token<'a>>) {
    while let Some(top) = stack.last()
          && should_pop(&token, top)
    {
        output.extend(stack.pop());
    }
    stack.push(token);
}

/// Flushes the current argument to the output, leaving its `(` in place.
fn process_comma<'a>(token: &Token<'a>,
                     stack: &mut Vec<Token<'a>>,
                     output: &mut Vec<Token<'a>>,
                     frames: &mut [ArgumentFrame])
                     -> ParseResult<()> {
    let misplaced = ParseError::MisplacedComma { position: token.position() };
    let frame = frames.last_mut().ok_or_else(|| misplaced.clone())?;

    loop {
        match stack.last() {
            Some(top) if top.is_left_parenthesis() => break,
            Some(_) => output.extend(stack.pop()),
            None => return Err(misplaced),
        }
    }

    frame.comma();
    Ok(())
}

/// Flushes the parenthesized group and binds a preceding function to it.
fn process_right_parenthesis<'a>(token: &Token<'a>,
                                 stack: &mut Vec<Token<'a>>,
                                 output: &mut Vec<Token<'a>>,
                                 frames: &mut Vec<ArgumentFrame>)
                                 -> ParseResult<()> {
    let unbalanced = ParseError::UnbalancedParenthesis { position: token.position() };

    loop {
        match stack.pop() {
            Some(top) if top.is_left_parenthesis() => break,
            Some(top) => output.push(top),
            None => return Err(unbalanced),
        }
    }

    let arguments = frames.pop().ok_or(unbalanced)?.count();

    if let Some(top) = stack.last()
       && top.is_function()
    {
        output.extend(stack.pop().map(|function| function.with_arity(arguments)));
    }

    Ok(())
}

/// Marks the innermost argument list as non-empty.
fn mark_content(frames: &mut [ArgumentFrame]) {
    if let Some(frame) = frames.last_mut() {
        frame.content();
    }
}

/// Renders tokens separated by spaces, for logging and tests.
///
/// # Example
/// ```
/// use shunt::interpreter::{
///     lexer::tokenize,
///     parser::core::{display_tokens, parse},
/// };
///
/// let postfix = parse(&tokenize("1+2*3").unwrap()).unwrap();
/// assert_eq!(display_tokens(&postfix), "1 2 3 * +");
/// ```
#[must_use]
pub fn display_tokens(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(Token::text).collect::<Vec<_>>().join(" ")
}
