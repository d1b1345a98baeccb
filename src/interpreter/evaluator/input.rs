use std::collections::VecDeque;

use tracing::trace;

use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

/// Where `DAWAT` gets its input lines from.
pub trait InputSource {
    /// Returns the next line without its line terminator, or `None` once the
    /// source is exhausted.
    fn read_line(&mut self) -> Option<String>;
}

/// A source with no lines at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn read_line(&mut self) -> Option<String> {
        None
    }
}

/// A fixed list of lines, handed out in order.
///
/// # Example
/// ```
/// use sugod::interpreter::evaluator::input::{InputSource, ScriptedInput};
///
/// let mut input = ScriptedInput::new(["3, 4", "x"]);
///
/// assert_eq!(input.read_line().as_deref(), Some("3, 4"));
/// assert_eq!(input.read_line().as_deref(), Some("x"));
/// assert_eq!(input.read_line(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    /// Creates a source that yields `lines` one by one.
    pub fn new<I, S>(lines: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { lines: lines.into_iter().map(Into::into).collect() }
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}

/// Reads lines from the process's standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match std::io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_string()),
        }
    }
}

impl Context {
    /// Evaluates `DAWAT: a, b, ...`.
    ///
    /// Reads one line, splits it on commas and assigns the trimmed fields to
    /// the named variables in order. Each field is converted according to the
    /// declared type of its variable. Every field is converted before any
    /// variable is written, so a bad field leaves all of them unchanged.
    ///
    /// # Errors
    /// - [`RuntimeError::InputUnavailable`] when the source has no more lines.
    /// - [`RuntimeError::InputCountMismatch`] when the number of fields
    ///   differs from the number of names.
    /// - [`RuntimeError::UnknownVariable`] for an undeclared name.
    /// - [`RuntimeError::InvalidInput`] when a field does not convert.
    pub(crate) fn eval_read(&mut self, names: &[String], pos: Position) -> EvalResult<()> {
        let line = self.read_input_line()
                       .ok_or(RuntimeError::InputUnavailable { pos })?;
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();

        if fields.len() != names.len() {
            return Err(RuntimeError::InputCountMismatch { expected: names.len(),
                                                          found: fields.len(),
                                                          pos });
        }

        let mut values = Vec::with_capacity(names.len());
        for (name, field) in names.iter().zip(&fields) {
            let expected = self.env.declared_type(name, pos)?;
            let value =
                expected.parse_input(field)
                        .ok_or_else(|| RuntimeError::InvalidInput { name: name.clone(),
                                                                    expected,
                                                                    input: (*field).to_string(),
                                                                    pos })?;
            values.push(value);
        }

        for (name, value) in names.iter().zip(values) {
            self.env.write(name, value, pos)?;
        }

        trace!(count = names.len(), "read input");
        Ok(())
    }
}
