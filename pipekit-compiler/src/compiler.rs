//! Pipeline compiler
//!
//! Validates a pipeline descriptor and builds its IR. The executor for each
//! component is the `pipekit` binary itself, started inside `image` with
//! the service's executor input placeholder.

use pipekit_core::domain::component::OUTPUT_KEY;
use pipekit_core::{Component, Pipeline};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{CompileError, Result};
use crate::ir::{
    CachingOptions, ComponentRef, ComponentSpec, ContainerSpec, DagOutputParameter, DagOutputs,
    DagSpec, DeploymentSpec, ExecutorSpec, InterfaceDefinitions, PipelineInfo, PipelineSpec,
    SCHEMA_VERSION, TaskInfo, TaskInputParameter, TaskInputs, TaskSpec, ValueFromParameter,
};
use crate::package;

/// Image the compiled executor runs in unless overridden
pub const DEFAULT_EXECUTOR_IMAGE: &str = "pipekit:latest";

/// Placeholder the service replaces with the executor input document
const EXECUTOR_INPUT_PLACEHOLDER: &str = "{{$}}";

/// Compiler options
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Container image holding the `pipekit` binary
    pub image: String,
    /// Whether the service may reuse cached task results
    pub enable_cache: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            image: DEFAULT_EXECUTOR_IMAGE.to_string(),
            enable_cache: true,
        }
    }
}

/// Compiles pipeline descriptors into IR
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    /// Builds the IR for `pipeline`
    ///
    /// # Errors
    /// Returns an error if:
    /// - Any name is not a lowercase identifier
    /// - The task reads a parameter the pipeline does not declare
    /// - The task input type differs from the parameter type
    pub fn compile(&self, pipeline: &Pipeline) -> Result<PipelineSpec> {
        validate(pipeline)?;

        let task = &pipeline.task;
        let component = &task.component;
        debug!(pipeline = %pipeline.name, task = %task.name, "Compiling pipeline");

        let mut components = BTreeMap::new();
        components.insert(component.component_ref(), component_spec(component));

        let mut executors = BTreeMap::new();
        executors.insert(
            component.executor_label(),
            ExecutorSpec {
                container: self.container_spec(component),
            },
        );

        let mut task_inputs = BTreeMap::new();
        task_inputs.insert(
            component.input.name.clone(),
            TaskInputParameter {
                component_input_parameter: pipeline.input.name.clone(),
            },
        );

        let mut tasks = BTreeMap::new();
        tasks.insert(
            task.name.clone(),
            TaskSpec {
                caching_options: CachingOptions {
                    enable_cache: self.options.enable_cache,
                },
                component_ref: ComponentRef {
                    name: component.component_ref(),
                },
                inputs: TaskInputs {
                    parameters: task_inputs,
                },
                task_info: TaskInfo {
                    name: task.name.clone(),
                },
            },
        );

        let mut outputs = BTreeMap::new();
        outputs.insert(
            OUTPUT_KEY.to_string(),
            DagOutputParameter {
                value_from_parameter: ValueFromParameter {
                    output_parameter_key: OUTPUT_KEY.to_string(),
                    producer_subtask: task.name.clone(),
                },
            },
        );

        let root = ComponentSpec {
            dag: Some(DagSpec {
                outputs: DagOutputs {
                    parameters: outputs,
                },
                tasks,
            }),
            executor_label: None,
            input_definitions: Some(InterfaceDefinitions::single(
                pipeline.input.name.clone(),
                pipeline.input.parameter_type,
            )),
            output_definitions: Some(InterfaceDefinitions::single(OUTPUT_KEY, component.output)),
        };

        Ok(PipelineSpec {
            components,
            deployment_spec: DeploymentSpec { executors },
            pipeline_info: PipelineInfo {
                description: pipeline.description.clone(),
                name: pipeline.name.clone(),
            },
            root,
            schema_version: SCHEMA_VERSION.to_string(),
            sdk_version: format!("pipekit-{}", env!("CARGO_PKG_VERSION")),
        })
    }

    /// Compiles `pipeline` and writes the package to `path`
    ///
    /// Any existing file at `path` is overwritten.
    pub fn compile_to_file(&self, pipeline: &Pipeline, path: &Path) -> Result<PipelineSpec> {
        let spec = self.compile(pipeline)?;
        let yaml = package::to_yaml(&spec)?;

        std::fs::write(path, yaml).map_err(|source| CompileError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Compiled pipeline '{}' to {}", pipeline.name, path.display());
        Ok(spec)
    }

    fn container_spec(&self, component: &Component) -> ContainerSpec {
        ContainerSpec {
            args: vec![
                "--executor-input".to_string(),
                EXECUTOR_INPUT_PLACEHOLDER.to_string(),
                "--component".to_string(),
                component.name.clone(),
            ],
            command: vec!["pipekit".to_string(), "execute".to_string()],
            image: self.options.image.clone(),
        }
    }
}

fn component_spec(component: &Component) -> ComponentSpec {
    ComponentSpec {
        dag: None,
        executor_label: Some(component.executor_label()),
        input_definitions: Some(InterfaceDefinitions::single(
            component.input.name.clone(),
            component.input.parameter_type,
        )),
        output_definitions: Some(InterfaceDefinitions::single(OUTPUT_KEY, component.output)),
    }
}

fn validate(pipeline: &Pipeline) -> Result<()> {
    validate_name("pipeline", &pipeline.name)?;
    validate_name("task", &pipeline.task.name)?;
    validate_name("component", &pipeline.task.component.name)?;

    let task = &pipeline.task;
    if task.input_from != pipeline.input.name {
        return Err(CompileError::UnboundInput {
            task: task.name.clone(),
            parameter: task.input_from.clone(),
        });
    }

    let expected = task.component.input.parameter_type;
    if expected != pipeline.input.parameter_type {
        return Err(CompileError::TypeMismatch {
            task: task.name.clone(),
            parameter: pipeline.input.name.clone(),
            expected: expected.to_string(),
            found: pipeline.input.parameter_type.to_string(),
        });
    }

    Ok(())
}

fn validate_name(kind: &'static str, name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && !name.starts_with('-')
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if valid {
        Ok(())
    } else {
        Err(CompileError::InvalidName {
            kind,
            name: name.to_string(),
        })
    }
}
