use crate::{
    ast::{BinaryOperator, Position},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two already evaluated values.
    ///
    /// Arithmetic operators go to [`Context::eval_scalar_op`], equality and
    /// ordering to [`Context::eval_comparison`], and `UG`, `O` and `&` to
    /// [`Context::eval_logic`].
    ///
    /// # Example
    /// ```
    /// use sugod::{
    ///     ast::{BinaryOperator, Position},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let pos = Position::new(1, 1);
    /// let left = Value::Integer(3);
    /// let right = Value::Decimal(0.5);
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &left, &right, pos);
    /// assert_eq!(result.unwrap(), Value::Decimal(3.5));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       pos: Position)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Concat, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Sub,
        };

        match op {
            Add | Sub | Mul | Div | Mod => Self::eval_scalar_op(op, left, right, pos),
            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, left, right, pos)
            },
            And | Or | Concat => Self::eval_logic(op, left, right, pos),
        }
    }
}
