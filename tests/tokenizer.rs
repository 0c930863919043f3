use shunt::{
    ParseError,
    interpreter::catalog::CATALOG,
    preprocess,
    token::{Arity, Operation, Parenthesis, TokenKind},
    tokenize,
};

fn texts(expression: &str) -> Vec<&str> {
    tokenize(expression).unwrap_or_else(|e| panic!("'{expression}' failed: {e}"))
                        .iter()
                        .map(|t| t.text())
                        .collect()
}

#[test]
fn preprocessing_is_idempotent() {
    for text in [" tE s t", "Sin( X ) +\t2", "", "already"] {
        let once = preprocess(text);
        assert_eq!(preprocess(&once), once);
    }
    assert_eq!(preprocess(" tE s t"), "test");
}

#[test]
fn longest_symbol_wins() {
    assert_eq!(texts("2**3"), ["2", "**", "3"]);
    assert_eq!(texts("1<=2"), ["1", "<=", "2"]);
    assert_eq!(texts("1<<2"), ["1", "<<", "2"]);
    assert_eq!(texts("true&&false"), ["true", "&&", "false"]);
    assert_eq!(texts("ceiling(1)"), ["ceiling", "(", "1", ")"]);
    assert_eq!(texts("ceil(1)"), ["ceil", "(", "1", ")"]);
}

#[test]
fn names_that_extend_a_function_are_symbols() {
    let tokens = tokenize("sinh+sin(1)").unwrap();

    assert_eq!(tokens[0].text(), "sinh");
    assert_eq!(tokens[0].kind(), TokenKind::Symbol);
    assert!(tokens[2].is_function());
}

#[test]
fn symbols_may_contain_dots_and_brackets() {
    assert_eq!(texts("rate.max*v[2]"), ["rate.max", "*", "v[2]"]);
}

#[test]
fn number_literals_keep_their_exponent_sign() {
    assert_eq!(texts("1e-3+.5"), ["1e-3", "+", ".5"]);
    assert_eq!(texts("2.10*3"), ["2.10", "*", "3"]);
}

#[test]
fn plus_and_minus_resolve_from_the_previous_token() {
    let arities = |expression: &str| -> Vec<Option<Arity>> {
        tokenize(expression).unwrap()
                            .iter()
                            .filter(|t| matches!(t.text(), "+" | "-"))
                            .map(|t| t.arity())
                            .collect()
    };

    assert_eq!(arities("-1"), [Some(Arity::Fixed(1))]);
    assert_eq!(arities("1-1"), [Some(Arity::Fixed(2))]);
    assert_eq!(arities("(1)-1"), [Some(Arity::Fixed(2))]);
    assert_eq!(arities("x+-1"), [Some(Arity::Fixed(2)), Some(Arity::Fixed(1))]);
    assert_eq!(arities("(-1)"), [Some(Arity::Fixed(1))]);
    // Any operator, postfix ones included, leaves the next minus unary.
    assert_eq!(arities("90°-1"), [Some(Arity::Fixed(1))]);
    assert_eq!(arities("(90°)-1"), [Some(Arity::Fixed(2))]);
    // A comma ends an operand too.
    assert_eq!(arities("max(1,-2)"), [Some(Arity::Fixed(2))]);
}

#[test]
fn unary_minus_binds_tighter_than_binary_minus() {
    let tokens = tokenize("-1-1").unwrap();

    assert_eq!(tokens[0].precedence(), Some(3));
    assert!(tokens[0].right_associative());
    assert_eq!(tokens[2].precedence(), Some(6));
    assert!(!tokens[2].right_associative());
}

#[test]
fn tokens_carry_their_operation() {
    let tokens = tokenize("2/=3").unwrap();
    let binding = tokens[1].binding().unwrap();

    assert_eq!(binding.operation, Operation::NotEqual);
    assert_eq!(binding.precedence, 16);
    assert_eq!(tokenize("(").unwrap()[0].kind(),
               TokenKind::Parenthesis(Parenthesis::Open));
}

#[test]
fn unrecognized_input_reports_its_position() {
    assert_eq!(tokenize("2+$"),
               Err(ParseError::UnrecognizedInput { text:     "$".into(),
                                                   position: 2, }));
}

#[test]
fn every_catalog_symbol_is_a_single_token() {
    for entry in CATALOG {
        let symbol = entry.symbol;
        let tokens = tokenize(symbol).unwrap_or_else(|e| panic!("'{symbol}' failed: {e}"));
        assert_eq!(tokens.len(), 1, "'{symbol}'");
        assert_eq!(tokens[0].text(), symbol);
    }
}

#[test]
fn isolated_symbols_keep_their_catalog_metadata() {
    use shunt::interpreter::catalog::Class;

    for entry in CATALOG {
        let token = tokenize(entry.symbol).unwrap()[0];
        match entry.class {
            Class::Operator(binding) => assert_eq!(token.kind(), TokenKind::Operator(binding)),
            Class::Function(binding) => assert_eq!(token.kind(), TokenKind::Function(binding)),
            Class::Ambiguous(_) => assert_eq!(token.arity(), Some(Arity::Fixed(1))),
            Class::Parenthesis(side) => assert_eq!(token.kind(), TokenKind::Parenthesis(side)),
            Class::Comma => assert_eq!(token.kind(), TokenKind::Comma),
        }
    }
}

#[test]
fn leading_context_decides_plus() {
    let plus = |expression: &str| {
        tokenize(expression).unwrap()
                            .into_iter()
                            .find(|t| t.text() == "+")
                            .and_then(|t| t.arity())
    };

    assert_eq!(plus("+2"), Some(Arity::Fixed(1)));
    assert_eq!(plus("(+2"), Some(Arity::Fixed(1)));
    assert_eq!(plus("2+2"), Some(Arity::Fixed(2)));
    assert_eq!(plus(")+2"), Some(Arity::Fixed(2)));
    assert_eq!(plus(",+2"), Some(Arity::Fixed(2)));
}
