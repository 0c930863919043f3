use std::cmp::Ordering;

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64,
};

/// Represents a runtime value in the evaluator.
///
/// Exactly one representation is active at a time. Values are produced by
/// literals, by the caller's variable lookup, or as the result of an
/// operation, and are copied freely.
///
/// The derived `PartialEq` is structural: `Integer(1)` and `Float(1.0)` are
/// different values. Use [`Value::equals`] and [`Value::compare`] for the
/// widened numeric comparison the `==` and `<` operators perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 64 bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// A boolean value (`true` or `false`).
    ///
    /// Produced by comparison and logical operators. Booleans widen to `0`
    /// and `1` for comparisons but are rejected by arithmetic.
    Boolean(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

/// Two operands after numeric promotion.
///
/// If either operand was a float, both are floats; otherwise both are
/// integers. Booleans never reach this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Promoted {
    /// Both operands were integers.
    Integers(i64, i64),
    /// At least one operand was a float.
    Floats(f64, f64),
}

impl Value {
    /// Parses a literal as written in an expression.
    ///
    /// `true` and `false` become booleans. Text containing `.` or `e` is
    /// always parsed as a float, anything else as an integer.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidLiteral` if the text is none of the above,
    /// including integers outside the `i64` range.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from_literal("42").unwrap(), Value::Integer(42));
    /// assert_eq!(Value::from_literal("2.5").unwrap(), Value::Float(2.5));
    /// assert_eq!(Value::from_literal("1e3").unwrap(), Value::Float(1000.0));
    /// assert_eq!(Value::from_literal("true").unwrap(), Value::Boolean(true));
    /// assert!(Value::from_literal("1.2.3").is_err());
    /// ```
    pub fn from_literal(text: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidLiteral { text: text.to_string() };

        match text {
            "true" => Ok(Self::Boolean(true)),
            "false" => Ok(Self::Boolean(false)),
            _ if text.contains(['.', 'e']) => {
                // `f64::from_str` also accepts "inf" and "nan", which are not
                // numeric literals here.
                if !text.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
                    return Err(invalid());
                }
                text.parse().map(Self::Float).map_err(|_| invalid())
            },
            _ => text.parse().map(Self::Integer).map_err(|_| invalid()),
        }
    }

    /// Returns `true` if the value is a boolean.
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(_))
    }

    /// Returns `true` if the value is an integer.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Returns `true` if the value is a float.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Reads the value as an integer.
    ///
    /// Booleans widen to `0` or `1`. Floats are never narrowed.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(7).as_integer().unwrap(), 7);
    /// assert_eq!(Value::Boolean(true).as_integer().unwrap(), 1);
    /// assert!(Value::Float(7.0).as_integer().is_err());
    /// ```
    pub fn as_integer(&self) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Boolean(b) => Ok(i64::from(*b)),
            Self::Float(_) => Err(RuntimeError::TypeError { name:    "as_integer",
                                                            details: "a float cannot be read as an integer".into(), }),
        }
    }

    /// Reads the value as a float, widening integers and booleans.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(3).as_float().unwrap(), 3.0);
    /// assert_eq!(Value::Boolean(false).as_float().unwrap(), 0.0);
    /// ```
    pub fn as_float(&self) -> EvalResult<f64> {
        match self {
            Self::Float(r) => Ok(*r),
            Self::Integer(n) => Ok(i64_to_f64(*n)),
            Self::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
        }
    }

    /// Reads the value as a boolean.
    ///
    /// Only an actual boolean qualifies; numbers are not truthy.
    pub fn as_boolean(&self) -> EvalResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            Self::Integer(_) | Self::Float(_) => {
                Err(RuntimeError::TypeError { name:    "as_boolean",
                                              details: format!("expected a boolean, found {}",
                                                               self.type_name()), })
            },
        }
    }

    /// Name of the active representation, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
        }
    }

    /// Widened equality.
    ///
    /// If either side is a float both are compared as floats, otherwise both
    /// are compared as integers with booleans counting as `0` and `1`.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(1).equals(&Value::Float(1.0)));
    /// assert!(Value::Boolean(true).equals(&Value::Integer(1)));
    /// assert!(!Value::Float(f64::NAN).equals(&Value::Float(f64::NAN)));
    /// ```
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }

    /// Widened partial ordering, following the same rules as
    /// [`Value::equals`]. Returns `None` when a NaN is involved.
    ///
    /// # Example
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use shunt::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Boolean(true).compare(&Value::Integer(2)), Some(Ordering::Less));
    /// assert_eq!(Value::Float(2.5).compare(&Value::Integer(2)), Some(Ordering::Greater));
    /// assert_eq!(Value::Float(f64::NAN).compare(&Value::Integer(2)), None);
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self.widen(), other.widen()) {
            (Widened::Integer(a), Widened::Integer(b)) => Some(a.cmp(&b)),
            (a, b) => a.to_f64().partial_cmp(&b.to_f64()),
        }
    }

    /// Promotes two numeric operands to a common representation.
    ///
    /// Booleans are rejected with a `TypeError` naming `operation`.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::value::core::{Promoted, Value};
    ///
    /// let p = Value::Integer(2).promote(&Value::Float(0.5), "+").unwrap();
    /// assert_eq!(p, Promoted::Floats(2.0, 0.5));
    ///
    /// assert!(Value::Integer(2).promote(&Value::Boolean(true), "+").is_err());
    /// ```
    pub fn promote(&self, other: &Self, operation: &'static str) -> EvalResult<Promoted> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Ok(Promoted::Integers(*a, *b)),
            (Self::Float(a), Self::Float(b)) => Ok(Promoted::Floats(*a, *b)),
            (Self::Integer(a), Self::Float(b)) => Ok(Promoted::Floats(i64_to_f64(*a), *b)),
            (Self::Float(a), Self::Integer(b)) => Ok(Promoted::Floats(*a, i64_to_f64(*b))),
            (Self::Boolean(_), _) | (_, Self::Boolean(_)) => {
                Err(RuntimeError::TypeError { name:    operation,
                                              details: "booleans are not numbers".into(), })
            },
        }
    }

    /// Reads a numeric operand as a float, rejecting booleans.
    ///
    /// Unlike [`Value::as_float`] this is used by operations that must not
    /// silently accept `true` and `false`.
    pub fn numeric_f64(&self, operation: &'static str) -> EvalResult<f64> {
        match self {
            Self::Integer(n) => Ok(i64_to_f64(*n)),
            Self::Float(r) => Ok(*r),
            Self::Boolean(_) => Err(RuntimeError::TypeError { name:    operation,
                                                             details: "booleans are not numbers".into(), }),
        }
    }

    const fn widen(self) -> Widened {
        match self {
            Self::Integer(n) => Widened::Integer(n),
            Self::Boolean(b) => Widened::Integer(b as i64),
            Self::Float(r) => Widened::Float(r),
        }
    }
}

/// A value with booleans folded into integers.
#[derive(Clone, Copy)]
enum Widened {
    Integer(i64),
    Float(f64),
}

impl Widened {
    const fn to_f64(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Float(r) => r,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{r}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}
