use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `UG`, `O` or `&` on two evaluated operands.
    ///
    /// `UG` and `O` combine the truthiness of both operands and always give a
    /// boolean. By the time this runs both sides have been evaluated; there
    /// is no short-circuiting. `&` joins the display text of both operands
    /// with nothing in between.
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
    /// let joined = Context::eval_logic(BinaryOperator::Concat,
    ///                                  &Value::Integer(4),
    ///                                  &Value::Character('x'),
    ///                                  pos).unwrap();
    /// assert_eq!(joined, Value::Text("4x".to_string()));
    ///
    /// let both = Context::eval_logic(BinaryOperator::And,
    ///                                &Value::Integer(1),
    ///                                &Value::Text(String::new()),
    ///                                pos).unwrap();
    /// assert_eq!(both, Value::Bool(false));
    /// ```
    pub fn eval_logic(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      pos: Position)
                      -> EvalResult<Value> {
        match op {
            BinaryOperator::And => Ok(Value::Bool(left.is_truthy() && right.is_truthy())),
            BinaryOperator::Or => Ok(Value::Bool(left.is_truthy() || right.is_truthy())),
            BinaryOperator::Concat => Ok(Value::Text(format!("{left}{right}"))),
            _ => Err(RuntimeError::TypeError { details: format!("'{op}' is not a logical operator"),
                                               pos }),
        }
    }
}
