use crate::{
    interpreter::{
        evaluator::{
            binary::{bitwise, comparison, logic, power, scalar},
            core::EvalResult,
            function::{builtin, log, min_max, round},
            unary,
            utils::check_arity_range,
        },
        value::core::Value,
    },
    token::Operation,
};

impl Operation {
    /// Applies the operation to its operands, given in left to right order.
    ///
    /// Every operation validates the operand count first, then the operand
    /// types, then computes.
    ///
    /// # Example
    /// ```
    /// use shunt::{interpreter::value::core::Value, token::Operation};
    ///
    /// let sum = Operation::Plus.apply(&[Value::Integer(2), Value::Float(0.5)]).unwrap();
    /// assert_eq!(sum, Value::Float(2.5));
    ///
    /// let negated = Operation::Minus.apply(&[Value::Integer(2)]).unwrap();
    /// assert_eq!(negated, Value::Integer(-2));
    ///
    /// assert!(Operation::Abs.apply(&[]).is_err());
    /// ```
    pub fn apply(self, args: &[Value]) -> EvalResult<Value> {
        match self {
            Self::Plus | Self::Minus => {
                check_arity_range(args, 1, 2, self.name())?;
                match (self, args) {
                    (Self::Plus, [value]) => unary::identity(value),
                    (Self::Minus, [value]) => unary::negate(value),
                    (Self::Plus, _) => scalar::add(args),
                    _ => scalar::subtract(args),
                }
            },
            Self::Multiply => scalar::multiply(args),
            Self::Divide => scalar::divide(args),
            Self::Modulo => scalar::modulo(args),
            Self::Remainder => scalar::remainder(args),
            Self::Power => power::power(args),
            Self::BitwiseAnd => bitwise::and(args),
            Self::BitwiseOr => bitwise::or(args),
            Self::BitwiseXor => bitwise::xor(args),
            Self::ShiftLeft => bitwise::shift_left(args),
            Self::ShiftRight => bitwise::shift_right(args),
            Self::BitwiseNot => unary::bitwise_not(args),
            Self::LogicalAnd => logic::and(args),
            Self::LogicalOr => logic::or(args),
            Self::LogicalNot => unary::logical_not(args),
            Self::Equal
            | Self::NotEqual
            | Self::Less
            | Self::Greater
            | Self::LessEqual
            | Self::GreaterEqual => comparison::compare(self, args),
            Self::ApproxEqual => comparison::approx_equal(args),
            Self::Min | Self::Max => min_max::min_max(self, args),
            Self::Abs => builtin::abs(args),
            Self::Ln => builtin::ln(args),
            Self::Log => log::log(args),
            Self::Exp => builtin::exp(args),
            Self::Sin => builtin::sin(args),
            Self::Cos => builtin::cos(args),
            Self::Tan => builtin::tan(args),
            Self::Asin => builtin::asin(args),
            Self::Acos => builtin::acos(args),
            Self::Atan => builtin::atan(args),
            Self::Degrees => builtin::degrees(args),
            Self::Round | Self::Floor | Self::Ceiling => round::round(self, args),
        }
    }
}
