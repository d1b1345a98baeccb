use std::cmp::Ordering;

use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates an equality or ordering comparison.
    ///
    /// Equality compares values of the same kind only: `1 == 1.0` is false
    /// and so is `'a' == "a"`. Ordering accepts two numbers (promoted to
    /// decimals when mixed), or any mix of characters and text, which compare
    /// as text.
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
    /// let result = Context::eval_comparison(BinaryOperator::LessEqual,
    ///                                       &Value::Integer(2),
    ///                                       &Value::Decimal(2.0),
    ///                                       pos).unwrap();
    /// assert_eq!(result, Value::Bool(true));
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Equal,
    ///                                       &Value::Integer(2),
    ///                                       &Value::Decimal(2.0),
    ///                                       pos).unwrap();
    /// assert_eq!(result, Value::Bool(false));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           pos: Position)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let result = match op {
            Equal => left == right,
            NotEqual => left != right,
            Less | Greater | LessEqual | GreaterEqual => {
                let ordering = Self::compare(op, left, right, pos)?;
                match op {
                    Less => ordering == Some(Ordering::Less),
                    Greater => ordering == Some(Ordering::Greater),
                    LessEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
                    _ => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
                }
            },
            _ => {
                return Err(RuntimeError::TypeError { details: format!("'{op}' is not a comparison"),
                                                     pos });
            },
        };

        Ok(Value::Bool(result))
    }

    /// Orders two values. `None` means the values are unordered (a NaN was
    /// involved).
    fn compare(op: BinaryOperator,
               left: &Value,
               right: &Value,
               pos: Position)
               -> EvalResult<Option<Ordering>> {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Ok(Some(a.cmp(b))),
            (l, r) if l.is_numeric() && r.is_numeric() => {
                Ok(l.as_decimal(pos)?.partial_cmp(&r.as_decimal(pos)?))
            },
            _ => match (left.as_text(), right.as_text()) {
                (Some(a), Some(b)) => Ok(Some(a.cmp(&b))),
                _ => Err(RuntimeError::TypeError { details: format!("Cannot compare {} and {} with '{op}'",
                                                                    left.type_name(),
                                                                    right.type_name()),
                                                   pos }),
            },
        }
    }
}
