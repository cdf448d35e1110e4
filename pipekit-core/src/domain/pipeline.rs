//! Pipeline domain types

use thiserror::Error;

use crate::domain::component::Component;
use crate::domain::parameter::{Arguments, ParameterSpec};

/// Errors raised when binding arguments to a pipeline
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Missing argument for pipeline parameter '{0}'")]
    MissingArgument(String),

    #[error("Unexpected argument '{0}' (pipeline '{1}' does not declare it)")]
    UnexpectedArgument(String, String),

    #[error("Argument '{name}' value '{value}' is not a valid {expected}")]
    InvalidArgument {
        name: String,
        value: String,
        expected: String,
    },
}

/// One invocation of a component inside a pipeline
///
/// The component's single input is fed from the pipeline parameter named
/// by `input_from`.
#[derive(Debug, Clone)]
pub struct Task {
    pub name: String,
    pub component: Component,
    pub input_from: String,
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        component: Component,
        input_from: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            component,
            input_from: input_from.into(),
        }
    }
}

/// Pipeline definition
///
/// A one-node workflow: a single input parameter, a single task bound to
/// it, and the task's output as the pipeline result. This is a static
/// declaration handed to the compiler; `run_local` exists to evaluate it
/// in-process.
#[derive(Debug, Clone)]
pub struct Pipeline {
    pub name: String,
    pub description: Option<String>,
    pub input: ParameterSpec,
    pub task: Task,
}

impl Pipeline {
    pub fn new(name: impl Into<String>, input: ParameterSpec, task: Task) -> Self {
        Self {
            name: name.into(),
            description: None,
            input,
            task,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Checks that `arguments` supply exactly the declared parameter
    ///
    /// # Errors
    /// Returns an error if the parameter is missing, an unknown key is
    /// present, or the value does not fit the parameter type.
    pub fn bind<'a>(&self, arguments: &'a Arguments) -> Result<&'a str, PipelineError> {
        if let Some(extra) = arguments.keys().find(|k| **k != self.input.name) {
            return Err(PipelineError::UnexpectedArgument(
                extra.clone(),
                self.name.clone(),
            ));
        }

        let value = arguments
            .get(&self.input.name)
            .ok_or_else(|| PipelineError::MissingArgument(self.input.name.clone()))?;

        if !self.input.parameter_type.accepts(value) {
            return Err(PipelineError::InvalidArgument {
                name: self.input.name.clone(),
                value: value.clone(),
                expected: self.input.parameter_type.to_string(),
            });
        }

        Ok(value.as_str())
    }

    /// Evaluates the pipeline in-process
    ///
    /// Invokes the task's component exactly once with the bound argument
    /// and returns its output as the pipeline result.
    pub fn run_local(&self, arguments: &Arguments) -> Result<String, PipelineError> {
        let value = self.bind(arguments)?;
        tracing::info!(pipeline = %self.name, task = %self.task.name, "Running pipeline locally");
        Ok(self.task.component.invoke(value))
    }
}
