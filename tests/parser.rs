use shunt::{
    ParseError,
    interpreter::parser::core::display_tokens,
    parse,
    token::Arity,
    tokenize,
};

fn postfix(expression: &str) -> String {
    let tokens = tokenize(expression).unwrap_or_else(|e| panic!("'{expression}' failed: {e}"));
    let postfix = parse(&tokens).unwrap_or_else(|e| panic!("'{expression}' failed: {e}"));
    display_tokens(&postfix)
}

fn parse_error(expression: &str) -> ParseError {
    let tokens = tokenize(expression).unwrap_or_else(|e| panic!("'{expression}' failed: {e}"));
    match parse(&tokens) {
        Ok(postfix) => panic!("'{expression}' parsed to '{}'", display_tokens(&postfix)),
        Err(e) => e,
    }
}

#[test]
fn lower_precedence_numbers_bind_tighter() {
    assert_eq!(postfix("1+2*3"), "1 2 3 * +");
    assert_eq!(postfix("1*2+3"), "1 2 * 3 +");
    assert_eq!(postfix("1<2&&3>2"), "1 2 < 3 2 > &&");
}

#[test]
fn left_associative_chains_group_from_the_left() {
    assert_eq!(postfix("1-2-3"), "1 2 - 3 -");
    assert_eq!(postfix("8/4/2"), "8 4 / 2 /");
}

#[test]
fn right_associative_chains_group_from_the_right() {
    assert_eq!(postfix("2**3**2"), "2 3 2 ** **");
    assert_eq!(postfix("--1"), "1 - -");
}

#[test]
fn parentheses_are_consumed() {
    assert_eq!(postfix("(1+2)*3"), "1 2 + 3 *");
    assert_eq!(postfix("((1))"), "1");
}

#[test]
fn functions_follow_their_arguments() {
    assert_eq!(postfix("sin(2.10*3)^2"), "2.10 3 * sin 2 ^");
    assert_eq!(postfix("max(1,2+3)"), "1 2 3 + max");
    assert_eq!(postfix("pow(2,max(1,3))*2"), "2 1 3 max pow 2 *");
}

#[test]
fn function_arity_is_the_argument_count() {
    let arity = |expression: &str| {
        let postfix = parse(&tokenize(expression).unwrap()).unwrap();
        postfix.iter().rev().find(|t| t.is_function()).and_then(|t| t.arity())
    };

    assert_eq!(arity("max()"), Some(Arity::Fixed(0)));
    assert_eq!(arity("round(2.5)"), Some(Arity::Fixed(1)));
    assert_eq!(arity("min(1,2,3,4)"), Some(Arity::Fixed(4)));
    assert_eq!(arity("max((1,2))"), Some(Arity::Fixed(1)));
}

#[test]
fn unbalanced_parentheses_are_rejected() {
    assert_eq!(parse_error("(1+2"), ParseError::UnbalancedParenthesis { position: 0 });
    assert_eq!(parse_error("1+2)"), ParseError::UnbalancedParenthesis { position: 3 });
    assert_eq!(parse_error("max(1,2"), ParseError::UnbalancedParenthesis { position: 3 });
}

#[test]
fn commas_outside_parentheses_are_rejected() {
    assert_eq!(parse_error("1,2"), ParseError::MisplacedComma { position: 1 });
}

#[test]
fn empty_input_parses_to_nothing() {
    assert_eq!(postfix(""), "");
}
