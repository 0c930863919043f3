use std::cmp::Ordering;

use shunt::{Value, evaluate, no_variables};

#[test]
fn integer_literals_stay_integers() {
    for n in [0_i64, 7, 42, 1_000_000, i64::MAX] {
        assert_eq!(evaluate(&n.to_string(), no_variables), Ok(Value::Integer(n)));
    }
}

#[test]
fn literals_with_a_dot_or_exponent_are_floats() {
    for text in ["1.0", ".5", "2.", "1e3", "1e-3", "2.5e+2"] {
        let value = evaluate(text, no_variables).unwrap_or_else(|e| panic!("'{text}': {e}"));
        assert!(value.is_float(), "'{text}' gave {value:?}");
    }
}

#[test]
fn out_of_range_integer_literals_are_rejected() {
    assert!(Value::from_literal("9223372036854775808").is_err());
    assert!(evaluate("9223372036854775808", no_variables).is_err());
}

#[test]
fn structural_equality_distinguishes_representations() {
    assert_ne!(Value::Integer(1), Value::Float(1.0));
    assert_ne!(Value::Integer(1), Value::Boolean(true));
    assert!(Value::Integer(1).equals(&Value::Float(1.0)));
    assert!(Value::Integer(1).equals(&Value::Boolean(true)));
}

#[test]
fn widened_ordering() {
    assert_eq!(Value::Integer(2).compare(&Value::Float(2.5)), Some(Ordering::Less));
    assert_eq!(Value::Boolean(false).compare(&Value::Integer(0)), Some(Ordering::Equal));
    assert_eq!(Value::Float(f64::NAN).compare(&Value::Float(f64::NAN)), None);
}

#[test]
fn accessors_respect_representations() {
    assert_eq!(Value::Boolean(true).as_integer(), Ok(1));
    assert!(Value::Float(2.0).as_integer().is_err());
    assert_eq!(Value::Integer(2).as_float(), Ok(2.0));
    assert_eq!(Value::Boolean(false).as_boolean(), Ok(false));
    assert!(Value::Integer(0).as_boolean().is_err());
}

#[test]
fn values_display_naturally() {
    assert_eq!(Value::Integer(-4).to_string(), "-4");
    assert_eq!(Value::Float(2.5).to_string(), "2.5");
    assert_eq!(Value::Boolean(true).to_string(), "true");
}
