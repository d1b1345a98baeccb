use crate::{
    ast::{Position, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation. Negating the smallest integer overflows.
    /// - `Plus`: numeric identity; the operand must still be a number.
    /// - `Not`: logical negation of the operand's truthiness, for any value.
    ///
    /// # Example
    /// ```
    /// use sugod::{
    ///     ast::{Position, UnaryOperator},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let pos = Position::new(1, 1);
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Integer(5), pos).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Not, &Value::Integer(0), pos).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    ///
    /// assert!(Context::eval_unary(UnaryOperator::Negate, &Value::Bool(true), pos).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, pos: Position) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Integer(n) => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(RuntimeError::Overflow { pos }),
                Value::Decimal(d) => Ok(Value::Decimal(-d)),
                _ => Err(RuntimeError::ExpectedNumber { found: value.type_name(),
                                                        pos }),
            },
            UnaryOperator::Plus => match value {
                Value::Integer(_) | Value::Decimal(_) => Ok(value.clone()),
                _ => Err(RuntimeError::ExpectedNumber { found: value.type_name(),
                                                        pos }),
            },
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
        }
    }
}
