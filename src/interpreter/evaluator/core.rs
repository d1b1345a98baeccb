use tracing::{debug, trace};

use crate::{
    ast::{Block, Expr, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::input::{InputSource, NoInput},
        value::core::{DeclaredType, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state for one run: the variable frames,
/// the text printed so far and the source `DAWAT` reads from.
///
/// ## Usage
///
/// Create a `Context`, call [`Context::execute`] with a parsed program and
/// collect the printed text with [`Context::output`]. Output is kept when
/// execution fails, so the text printed before a runtime error can still be
/// shown.
///
/// ```
/// use sugod::interpreter::{
///     evaluator::core::Context, lexer::scan, parser::core::parse_program,
/// };
///
/// let tokens = scan(r#"SUGOD IPAKITA: "hi" & $ IPAKITA: 1 / 0 KATAPUSAN"#).unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// let mut context = Context::new();
/// assert!(context.execute(&program).is_err());
/// assert_eq!(context.output(), "hi\n");
/// ```
pub struct Context {
    /// Variable frames, innermost last.
    pub env: Environment,
    output:  String,
    input:   Box<dyn InputSource>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context with a fresh root frame and no input.
    ///
    /// Any `DAWAT` executed in this context fails with
    /// [`RuntimeError::InputUnavailable`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_input(NoInput)
    }

    /// Creates a context whose `DAWAT` statements read from `input`.
    #[must_use]
    pub fn with_input(input: impl InputSource + 'static) -> Self {
        Self { env:    Environment::new(),
               output: String::new(),
               input:  Box::new(input), }
    }

    /// Text printed so far.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Takes the printed text, leaving the buffer empty.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    pub(crate) fn read_input_line(&mut self) -> Option<String> {
        self.input.read_line()
    }

    /// Executes a program's statements in order.
    ///
    /// Stops at the first runtime error. Text printed before the error stays
    /// in the output buffer.
    ///
    /// # Errors
    /// The first [`RuntimeError`] raised by any statement.
    pub fn execute(&mut self, statements: &[Statement]) -> EvalResult<()> {
        let result = statements.iter()
                               .try_for_each(|statement| self.eval_statement(statement));

        debug!(bytes = self.output.len(), ok = result.is_ok(), "execution finished");
        result
    }

    /// Executes a single statement.
    ///
    /// Declarations bind names in the current frame, `IPAKITA` appends to the
    /// output, `DAWAT` reads input and blocks, conditionals and loops run
    /// their bodies in child frames. Expression statements are evaluated for
    /// their effect and the value is dropped.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        trace!(pos = %statement.position(), "executing statement");

        match statement {
            Statement::VarDecl { declared_type,
                                 names,
                                 initializer,
                                 .. } => self.eval_var_decl(*declared_type, names, initializer.as_ref()),
            Statement::Print { value, .. } => {
                let value = self.eval(value)?;
                self.output.push_str(&value.to_string());
                Ok(())
            },
            Statement::Read { names, pos } => self.eval_read(names, *pos),
            Statement::Block(block) => self.eval_block(block),
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => self.eval_if(condition, then_branch, else_branch.as_ref()),
            Statement::For { initializer,
                             condition,
                             increment,
                             body,
                             .. } => self.eval_for(initializer, condition, increment, body),
            Statement::Expression { expr, .. } => self.eval(expr).map(|_| ()),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Both operands of every binary operator are evaluated, left first,
    /// before the operator is applied. `UG` and `O` do not short-circuit.
    ///
    /// # Example
    /// ```
    /// use sugod::{
    ///     ast::{BinaryOperator, Expr, Position},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let pos = Position::new(1, 1);
    /// let expr = Expr::Binary { left: Box::new(Expr::Literal { value: Value::Integer(7),
    ///                                                          pos }),
    ///                           op: BinaryOperator::Mod,
    ///                           right: Box::new(Expr::Literal { value: Value::Integer(3),
    ///                                                           pos }),
    ///                           pos };
    ///
    /// assert_eq!(Context::new().eval(&expr), Ok(Value::Integer(1)));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.clone()),
            Expr::Variable { name, pos } => self.env.read(name, *pos),
            Expr::Assign { name, value, pos } => {
                let value = self.eval(value)?;
                self.env.write(name, value.clone(), *pos)?;
                Ok(value)
            },
            Expr::Unary { op, right, pos } => {
                let value = self.eval(right)?;
                Self::eval_unary(*op, &value, *pos)
            },
            Expr::Binary { left,
                           op,
                           right,
                           pos, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *pos)
            },
        }
    }

    /// Runs a block's statements inside a new frame.
    pub fn eval_block(&mut self, block: &Block) -> EvalResult<()> {
        self.scoped(|context| {
                block.statements
                     .iter()
                     .try_for_each(|statement| context.eval_statement(statement))
            })
    }

    /// Runs `body` with a child frame pushed, popping it again on every exit
    /// path including errors.
    pub(crate) fn scoped<T>(&mut self,
                            body: impl FnOnce(&mut Self) -> EvalResult<T>)
                            -> EvalResult<T> {
        self.env.push_frame();
        let result = body(self);
        self.env.pop_frame();
        result
    }

    fn eval_var_decl(&mut self,
                     declared_type: DeclaredType,
                     names: &[String],
                     initializer: Option<&Expr>)
                     -> EvalResult<()> {
        // One evaluation, shared by every name.
        let value = match initializer {
            Some(expr) => self.eval(expr)?,
            None => declared_type.zero_value(),
        };

        for name in names {
            self.env.define(name, declared_type, value.clone());
        }
        Ok(())
    }

    fn eval_if(&mut self,
               condition: &Expr,
               then_branch: &Block,
               else_branch: Option<&Block>)
               -> EvalResult<()> {
        if self.eval(condition)?.is_truthy() {
            self.eval_block(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.eval_block(else_branch)
        } else {
            Ok(())
        }
    }
}
