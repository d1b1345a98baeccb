use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates an arithmetic operation.
    ///
    /// Two integers give an integer, computed with overflow checks. Any other
    /// pair of numbers is promoted to decimals first. Division and remainder
    /// by zero fail for both kinds; remainder keeps the sign of the dividend.
    ///
    /// # Example
    /// ```
    /// use sugod::{
    ///     ast::{BinaryOperator, Position},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let pos = Position::new(1, 1);
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Div,
    ///                                      &Value::Integer(7),
    ///                                      &Value::Integer(2),
    ///                                      pos).unwrap();
    /// assert_eq!(result, Value::Integer(3));
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Mod,
    ///                                      &Value::Integer(-7),
    ///                                      &Value::Integer(2),
    ///                                      pos).unwrap();
    /// assert_eq!(result, Value::Integer(-1));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          pos: Position)
                          -> EvalResult<Value> {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Self::eval_integer_op(op, *a, *b, pos),
            (l, r) if l.is_numeric() && r.is_numeric() => {
                Self::eval_decimal_op(op, l.as_decimal(pos)?, r.as_decimal(pos)?, pos)
            },
            _ => Err(RuntimeError::TypeError { details: format!("Cannot use '{op}' on {} and {}",
                                                                left.type_name(),
                                                                right.type_name()),
                                               pos }),
        }
    }

    fn eval_integer_op(op: BinaryOperator, a: i64, b: i64, pos: Position) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        let result = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            Div | Mod if b == 0 => return Err(RuntimeError::DivisionByZero { pos }),
            Div => a.checked_div(b),
            Mod => a.checked_rem(b),
            _ => return Err(Self::not_arithmetic(op, pos)),
        };

        result.map(Value::Integer)
              .ok_or(RuntimeError::Overflow { pos })
    }

    fn eval_decimal_op(op: BinaryOperator, a: f64, b: f64, pos: Position) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        Ok(Value::Decimal(match op {
                              Add => a + b,
                              Sub => a - b,
                              Mul => a * b,
                              Div | Mod if b == 0.0 => {
                                  return Err(RuntimeError::DivisionByZero { pos });
                              },
                              Div => a / b,
                              Mod => a % b,
                              _ => return Err(Self::not_arithmetic(op, pos)),
                          }))
    }

    fn not_arithmetic(op: BinaryOperator, pos: Position) -> RuntimeError {
        RuntimeError::TypeError { details: format!("'{op}' is not an arithmetic operator"),
                                  pos }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POS: Position = Position::new(2, 5);

    #[test]
    fn integer_overflow_is_reported() {
        let result = Context::eval_scalar_op(BinaryOperator::Add,
                                             &Value::Integer(i64::MAX),
                                             &Value::Integer(1),
                                             POS);
        assert_eq!(result, Err(RuntimeError::Overflow { pos: POS }));
    }

    #[test]
    fn decimal_division_by_zero_is_reported() {
        let result = Context::eval_scalar_op(BinaryOperator::Div,
                                             &Value::Decimal(1.0),
                                             &Value::Integer(0),
                                             POS);
        assert_eq!(result, Err(RuntimeError::DivisionByZero { pos: POS }));
    }

    #[test]
    fn text_operands_are_rejected() {
        let result = Context::eval_scalar_op(BinaryOperator::Mul,
                                             &Value::from("a"),
                                             &Value::Integer(2),
                                             POS);
        assert!(matches!(result, Err(RuntimeError::TypeError { .. })));
    }
}
