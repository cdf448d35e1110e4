//! Error types for the compiler

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for compiler operations
pub type Result<T> = std::result::Result<T, CompileError>;

/// Errors that can occur while compiling or loading a pipeline package
#[derive(Debug, Error)]
pub enum CompileError {
    /// A pipeline, task or component name is not a valid identifier
    #[error("Invalid {kind} name '{name}': use lowercase letters, digits and '-'")]
    InvalidName { kind: &'static str, name: String },

    /// A task input is not fed by a declared pipeline parameter
    #[error("Task '{task}' reads '{parameter}', which the pipeline does not declare")]
    UnboundInput { task: String, parameter: String },

    /// A task input and the parameter feeding it disagree on type
    #[error("Task '{task}' expects {expected} but parameter '{parameter}' is {found}")]
    TypeMismatch {
        task: String,
        parameter: String,
        expected: String,
        found: String,
    },

    /// YAML rendering or parsing failed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Reading or writing the package failed
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The package parsed but is not a pipeline spec
    #[error("Invalid pipeline package: {0}")]
    InvalidPackage(String),
}
