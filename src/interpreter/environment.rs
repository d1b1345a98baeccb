use std::collections::HashMap;

use tracing::trace;

use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{DeclaredType, Value},
    },
};

/// A variable slot: the type it was declared with and its current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Fixed at declaration.
    pub declared_type: DeclaredType,
    /// Replaced on every assignment.
    pub value:         Value,
}

/// The chain of variable frames active during one evaluation.
///
/// Frames form a stack: the last frame is the innermost scope and each frame's
/// parent is the one below it. The root frame is created with the environment
/// and is never popped.
#[derive(Debug, Clone)]
pub struct Environment {
    frames: Vec<HashMap<String, Variable>>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only an empty root frame.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![HashMap::new()] }
    }

    /// Number of active frames, the root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Opens a child frame on entry to a block.
    pub fn push_frame(&mut self) {
        self.frames.push(HashMap::new());
        trace!(depth = self.frames.len(), "pushed frame");
    }

    /// Discards the innermost frame and every variable declared in it.
    ///
    /// Popping when only the root frame remains does nothing.
    pub fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
        trace!(depth = self.frames.len(), "popped frame");
    }

    /// Declares `name` in the innermost frame, replacing any variable of the
    /// same name in that frame. Outer frames are untouched, so an inner
    /// declaration shadows an outer one.
    ///
    /// # Example
    /// ```
    /// use sugod::{
    ///     ast::Position,
    ///     interpreter::{
    ///         environment::Environment,
    ///         value::core::{DeclaredType, Value},
    ///     },
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.define("x", DeclaredType::Integer, Value::Integer(1));
    ///
    /// env.push_frame();
    /// env.define("x", DeclaredType::Integer, Value::Integer(2));
    /// assert_eq!(env.read("x", Position::default()), Ok(Value::Integer(2)));
    ///
    /// env.pop_frame();
    /// assert_eq!(env.read("x", Position::default()), Ok(Value::Integer(1)));
    /// ```
    pub fn define(&mut self, name: &str, declared_type: DeclaredType, value: Value) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.to_string(),
                         Variable { declared_type,
                                    value });
        }
    }

    /// Reads the value of the nearest variable called `name`.
    ///
    /// # Errors
    /// [`RuntimeError::UnknownVariable`] when no active frame declares it.
    pub fn read(&self, name: &str, pos: Position) -> EvalResult<Value> {
        self.lookup(name)
            .map(|variable| variable.value.clone())
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           pos })
    }

    /// Replaces the value of the nearest variable called `name`.
    ///
    /// The declared type is kept and not checked against the new value.
    ///
    /// # Errors
    /// [`RuntimeError::UnknownVariable`] when no active frame declares it.
    pub fn write(&mut self, name: &str, value: Value, pos: Position) -> EvalResult<()> {
        let variable =
            self.frames
                .iter_mut()
                .rev()
                .find_map(|frame| frame.get_mut(name))
                .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                               pos })?;
        variable.value = value;
        Ok(())
    }

    /// The declared type of the nearest variable called `name`.
    ///
    /// # Errors
    /// [`RuntimeError::UnknownVariable`] when no active frame declares it.
    pub fn declared_type(&self, name: &str, pos: Position) -> EvalResult<DeclaredType> {
        self.lookup(name)
            .map(|variable| variable.declared_type)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           pos })
    }

    fn lookup(&self, name: &str) -> Option<&Variable> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }
}
