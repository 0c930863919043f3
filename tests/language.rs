use std::fs::{self};

use shunt::{Error, RuntimeError, Value, evaluate, no_variables};
use walkdir::WalkDir;

/// Variables available to every case file.
fn lookup(name: &str) -> Result<Value, Error> {
    match name {
        "x" => Ok(Value::Integer(10)),
        "y" => Ok(Value::Float(2.5)),
        "flag" => Ok(Value::Boolean(true)),
        _ => Err(RuntimeError::UnknownVariable { name: name.to_string() }.into()),
    }
}

/// Runs every `expression => expected` line under `tests/cases`.
///
/// `expected` is either `error` or a constant expression whose value must be
/// structurally equal to the result, so `2` and `2.0` are different
/// expectations.
#[test]
fn case_files_evaluate() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (expression, expected) = line.split_once("=>")
                                             .unwrap_or_else(|| {
                                                 panic!("{path:?}:{}: missing '=>'", i + 1)
                                             });
            count += 1;

            let result = evaluate(expression, lookup);
            match expected.trim() {
                "error" => {
                    if let Ok(value) = result {
                        panic!("{path:?}:{}: '{expression}' evaluated to {value:?} but was \
                                expected to fail",
                               i + 1);
                    }
                },
                expected => {
                    let expected = evaluate(expected, no_variables).unwrap_or_else(|e| {
                                       panic!("{path:?}:{}: bad expectation: {e}", i + 1)
                                   });
                    match result {
                        Ok(value) => assert_eq!(value,
                                                expected,
                                                "{path:?}:{}: '{expression}'",
                                                i + 1),
                        Err(e) => panic!("{path:?}:{}: '{expression}' failed: {e}", i + 1),
                    }
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn assert_value(expression: &str, expected: Value) {
    match evaluate(expression, no_variables) {
        Ok(value) => assert_eq!(value, expected, "'{expression}'"),
        Err(e) => panic!("'{expression}' failed: {e}"),
    }
}

fn assert_failure(expression: &str) -> Error {
    match evaluate(expression, no_variables) {
        Ok(value) => panic!("'{expression}' evaluated to {value:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_follows_the_catalog() {
    assert_value("2+3*4", Value::Integer(14));
    assert_value("2*3+4", Value::Integer(10));
    assert_value("1 < 2 == true", Value::Boolean(true));
    assert_value("1 | 4 ^ 5", Value::Integer(1));
}

#[test]
fn unary_and_binary_minus_are_told_apart() {
    assert_value("3-1", Value::Integer(2));
    assert_value("3--1", Value::Integer(4));
    assert_value("-3", Value::Integer(-3));
    assert_value("(-3)", Value::Integer(-3));
    assert_value("-(-3)", Value::Integer(3));
}

#[test]
fn division_by_zero_is_reported() {
    assert_eq!(assert_failure("1/0"),
               Error::Runtime(RuntimeError::DivisionByZero { name: "/" }));
    assert_eq!(assert_failure("rem(1, 0)"),
               Error::Runtime(RuntimeError::DivisionByZero { name: "rem" }));
}

#[test]
fn undefined_powers_are_domain_errors() {
    for expression in ["0**0", "0**-1", "(-2.0)**0.5"] {
        assert!(matches!(assert_failure(expression),
                         Error::Runtime(RuntimeError::DomainError { name: "**", .. })),
                "'{expression}'");
    }
    assert!(matches!(assert_failure("pow(0, 0)"),
                     Error::Runtime(RuntimeError::DomainError { name: "pow", .. })));
}

#[test]
fn errors_name_the_symbol_as_written() {
    assert_eq!(assert_failure("7 % 0"),
               Error::Runtime(RuntimeError::DivisionByZero { name: "%" }));
    assert_eq!(assert_failure("mod(7, 0)"),
               Error::Runtime(RuntimeError::DivisionByZero { name: "mod" }));
    assert!(matches!(assert_failure("ceil(1, 0)"),
                     Error::Runtime(RuntimeError::DomainError { name: "ceil", .. })));
    assert!(matches!(assert_failure("ceiling(1, 2, 3)"),
                     Error::Runtime(RuntimeError::ArgumentCountMismatch { name: "ceiling", .. })));
}

#[test]
fn unknown_variables_fail_without_a_default() {
    assert_eq!(assert_failure("a + 1"),
               Error::Runtime(RuntimeError::UnknownVariable { name: "a".into() }));
}

#[test]
fn lookup_errors_pass_through_unchanged() {
    #[derive(Debug, PartialEq)]
    enum CallerError {
        Missing(String),
        Pipeline(Error),
    }

    impl From<Error> for CallerError {
        fn from(error: Error) -> Self {
            Self::Pipeline(error)
        }
    }

    let result = evaluate("1 + speed", |name| Err(CallerError::Missing(name.to_string())));
    assert_eq!(result, Err(CallerError::Missing("speed".into())));

    let result = evaluate("1 / 0", |_| Ok::<_, CallerError>(Value::Integer(0)));
    assert_eq!(result,
               Err(CallerError::Pipeline(Error::Runtime(RuntimeError::DivisionByZero { name:
                                                                                           "/" }))));
}

#[test]
fn lookup_is_called_once_per_occurrence() {
    let mut calls = Vec::new();
    let result = evaluate("a * a + b", |name| {
                     calls.push(name.to_string());
                     Ok::<_, Error>(Value::Integer(3))
                 });

    assert_eq!(result, Ok(Value::Integer(12)));
    assert_eq!(calls, ["a", "a", "b"]);
}
