//! Container-side executor
//!
//! The pipeline service starts the compiled executor image with the
//! executor input document substituted for `{{$}}`. This module parses that
//! document, invokes the requested component, and writes the output where
//! the service expects to collect it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::component::OUTPUT_KEY;
use crate::registry::ComponentRegistry;

/// Errors raised while executing a component inside its container
#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    #[error("Invalid executor input: {0}")]
    InvalidInput(#[from] serde_json::Error),

    #[error("Executor input has no value for parameter '{0}'")]
    MissingInput(String),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Executor input document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutorInput {
    #[serde(default)]
    pub inputs: ExecutorInputs,
    #[serde(default)]
    pub outputs: ExecutorOutputs,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutorInputs {
    #[serde(default)]
    pub parameter_values: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutorOutputs {
    #[serde(default)]
    pub parameters: BTreeMap<String, OutputParameter>,
    /// Where the service collects the executor output document
    #[serde(default)]
    pub output_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputParameter {
    pub output_file: String,
}

/// Executor output document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutorOutput {
    pub parameter_values: BTreeMap<String, serde_json::Value>,
}

/// Executes the component `name` against a raw executor input document
///
/// # Arguments
/// * `registry` - Components this executor image knows about
/// * `name` - Component to run
/// * `raw_input` - The executor input JSON
///
/// # Returns
/// The executor output, already written to the output locations named in
/// the input
pub fn execute(
    registry: &ComponentRegistry,
    name: &str,
    raw_input: &str,
) -> Result<ExecutorOutput, ExecutorError> {
    let component = registry
        .get(name)
        .ok_or_else(|| ExecutorError::UnknownComponent(name.to_string()))?;

    let input: ExecutorInput = serde_json::from_str(raw_input)?;

    let value = input
        .inputs
        .parameter_values
        .get(&component.input.name)
        .ok_or_else(|| ExecutorError::MissingInput(component.input.name.clone()))?;

    // Non-string scalars arrive as JSON numbers/booleans
    let argument = match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    info!(component = %component.name, "Executing component");
    let result = component.invoke(&argument);

    if let Some(param) = input.outputs.parameters.get(OUTPUT_KEY) {
        write_file(Path::new(&param.output_file), &result)?;
    }

    let mut parameter_values = BTreeMap::new();
    parameter_values.insert(OUTPUT_KEY.to_string(), serde_json::Value::String(result));
    let output = ExecutorOutput { parameter_values };

    if let Some(path) = &input.outputs.output_file {
        let body = serde_json::to_string(&output)?;
        write_file(Path::new(path), &body)?;
    }

    Ok(output)
}

fn write_file(path: &Path, contents: &str) -> Result<(), ExecutorError> {
    let io_err = |source| ExecutorError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, contents).map_err(io_err)?;
    debug!("Wrote {}", path.display());
    Ok(())
}
