use shunt::{
    Error, RuntimeError, Value, evaluate,
    interpreter::evaluator::binary::comparison::APPROX_ULPS,
    no_variables,
    token::Operation,
};

/// Returns `value` moved `ulps` representable floats upwards.
fn nudge(value: f64, ulps: u64) -> f64 {
    f64::from_bits(value.to_bits() + ulps)
}

fn approx(a: f64, b: f64) -> Value {
    Operation::ApproxEqual.apply(&[Value::Float(a), Value::Float(b)])
                          .unwrap_or_else(|e| panic!("~= failed: {e}"))
}

#[test]
fn approximate_equality_tolerates_four_ulps() {
    assert_eq!(APPROX_ULPS, 4);

    for x in [1.0, 0.1, 123_456.789, 1e-300] {
        assert_eq!(approx(x, x), Value::Boolean(true));
        assert_eq!(approx(x, nudge(x, 4)), Value::Boolean(true), "{x}");
        assert_eq!(approx(nudge(x, 4), x), Value::Boolean(true), "{x}");
        assert_eq!(approx(x, nudge(x, 5)), Value::Boolean(false), "{x}");
    }
}

#[test]
fn approximate_equality_crosses_zero() {
    let tiny = f64::from_bits(2);
    assert_eq!(approx(tiny, -tiny), Value::Boolean(true));
    assert_eq!(approx(0.0, -0.0), Value::Boolean(true));
}

#[test]
fn nan_compares_false() {
    let nan = Value::Float(f64::NAN);
    for operation in [Operation::Equal,
                      Operation::Less,
                      Operation::Greater,
                      Operation::LessEqual,
                      Operation::GreaterEqual,
                      Operation::ApproxEqual]
    {
        assert_eq!(operation.apply(&[nan, Value::Float(1.0)]),
                   Ok(Value::Boolean(false)),
                   "{}",
                   operation.name());
        assert_eq!(operation.apply(&[nan, nan]), Ok(Value::Boolean(false)));
    }
    assert_eq!(Operation::NotEqual.apply(&[nan, nan]), Ok(Value::Boolean(true)));
}

#[test]
fn rounding_scale_decides_the_result_type() {
    let round = |expression: &str| evaluate(expression, no_variables);

    assert_eq!(round("round(90,10)"), Ok(Value::Integer(90)));
    assert_eq!(round("round(90,10.0)"), Ok(Value::Float(90.0)));
    assert_eq!(round("floor(7,2.0)"), Ok(Value::Float(6.0)));
    assert_eq!(round("ceiling(7,2)"), Ok(Value::Integer(8)));
}

#[test]
fn division_by_zero_for_both_representations() {
    for expression in ["1/0", "1.0/0", "1/0.0", "1.5/0.0"] {
        assert_eq!(evaluate(expression, no_variables),
                   Err(Error::Runtime(RuntimeError::DivisionByZero { name: "/" })),
                   "'{expression}'");
    }
}

#[test]
fn power_overflow_becomes_a_float() {
    assert_eq!(evaluate("2**63", no_variables),
               Ok(Value::Float(9_223_372_036_854_775_808.0)));
    assert_eq!(evaluate("2**62", no_variables), Ok(Value::Integer(1 << 62)));
    assert_eq!(evaluate("(-2)**63", no_variables), Ok(Value::Integer(i64::MIN)));
    assert_eq!(evaluate("10**4294967296", no_variables), Ok(Value::Float(f64::INFINITY)));
}

#[test]
fn unit_bases_stay_integers_for_huge_exponents() {
    assert_eq!(evaluate("1**4294967296", no_variables), Ok(Value::Integer(1)));
    assert_eq!(evaluate("0**4294967296", no_variables), Ok(Value::Integer(0)));
    assert_eq!(evaluate("(-1)**4294967297", no_variables), Ok(Value::Integer(-1)));
    assert_eq!(evaluate("(-1)**9223372036854775806", no_variables), Ok(Value::Integer(1)));
}

#[test]
fn arithmetic_rejects_booleans() {
    for expression in ["true+1", "-true", "true*2", "max(true,1)", "abs(false)", "sin(true)"] {
        assert!(matches!(evaluate(expression, no_variables),
                         Err(Error::Runtime(RuntimeError::TypeError { .. }))),
                "'{expression}'");
    }
}

#[test]
fn argument_counts_are_checked() {
    assert_eq!(Operation::Abs.apply(&[]),
               Err(RuntimeError::ArgumentCountMismatch { name:     "abs",
                                                         found:    0,
                                                         expected: "1".into(), }));
    assert_eq!(Operation::Max.apply(&[Value::Integer(1)]),
               Err(RuntimeError::ArgumentCountMismatch { name:     "max",
                                                         found:    1,
                                                         expected: "at least 2".into(), }));
    assert_eq!(Operation::Log.apply(&[]),
               Err(RuntimeError::ArgumentCountMismatch { name:     "log",
                                                         found:    0,
                                                         expected: "1 or 2".into(), }));
}

#[test]
fn missing_operands_are_reported() {
    assert_eq!(evaluate("1+", no_variables),
               Err(Error::Runtime(RuntimeError::MissingOperand { name:      "+".into(),
                                                                 needed:    2,
                                                                 available: 1, })));
}

#[test]
fn leftover_operands_are_reported() {
    assert_eq!(evaluate("", no_variables),
               Err(Error::Runtime(RuntimeError::UnbalancedExpression { remaining: 0 })));
}

#[test]
fn shifts_outside_the_word_are_domain_errors() {
    for expression in ["1<<64", "1>>64", "1<<(-1)"] {
        assert!(matches!(evaluate(expression, no_variables),
                         Err(Error::Runtime(RuntimeError::DomainError { .. }))),
                "'{expression}'");
    }
    assert_eq!(evaluate("1<<63", no_variables), Ok(Value::Integer(i64::MIN)));
}
