use crate::{
    ast::{Block, Expr, Statement},
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates an `ALANG SA` loop.
    ///
    /// The initializer runs once in a frame of its own, so a variable it
    /// declares disappears when the loop ends. The condition is checked
    /// before every iteration including the first; while it is truthy the
    /// body runs in a fresh child frame, followed by the increment.
    ///
    /// # Example
    /// ```
    /// use sugod::interpreter::{
    ///     evaluator::core::Context, lexer::scan, parser::core::parse_program,
    /// };
    ///
    /// let source = "SUGOD
    ///     ALANG SA (MUGNA NUMERO i = 0, i < 3, i = i + 1) { IPAKITA: i }
    /// KATAPUSAN";
    /// let program = parse_program(&scan(source).unwrap()).unwrap();
    ///
    /// let mut context = Context::new();
    /// context.execute(&program).unwrap();
    ///
    /// assert_eq!(context.output(), "012");
    /// assert!(context.env.read("i", Default::default()).is_err());
    /// ```
    pub fn eval_for(&mut self,
                    initializer: &Statement,
                    condition: &Expr,
                    increment: &Statement,
                    body: &Block)
                    -> EvalResult<()> {
        self.scoped(|context| {
                context.eval_statement(initializer)?;

                while context.eval(condition)?.is_truthy() {
                    context.eval_block(body)?;
                    context.eval_statement(increment)?;
                }
                Ok(())
            })
    }
}
