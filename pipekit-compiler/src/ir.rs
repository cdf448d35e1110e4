//! Pipeline intermediate representation
//!
//! Serde mirror of the pipeline service's pipeline spec. Fields are declared
//! in lexical order of their serialized names and all maps are `BTreeMap`,
//! so rendering the same spec twice yields identical bytes.

use pipekit_core::ParameterType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// IR schema version this compiler emits
pub const SCHEMA_VERSION: &str = "2.1.0";

/// Top-level compiled pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSpec {
    pub components: BTreeMap<String, ComponentSpec>,
    pub deployment_spec: DeploymentSpec,
    pub pipeline_info: PipelineInfo,
    pub root: ComponentSpec,
    pub schema_version: String,
    pub sdk_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub name: String,
}

/// A component definition, or the root DAG when `dag` is set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dag: Option<DagSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executor_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_definitions: Option<InterfaceDefinitions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_definitions: Option<InterfaceDefinitions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterfaceDefinitions {
    pub parameters: BTreeMap<String, ParameterDefinition>,
}

impl InterfaceDefinitions {
    /// Interface with a single parameter
    pub fn single(name: impl Into<String>, parameter_type: ParameterType) -> Self {
        let mut parameters = BTreeMap::new();
        parameters.insert(name.into(), ParameterDefinition { parameter_type });
        Self { parameters }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDefinition {
    pub parameter_type: ParameterType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentSpec {
    pub executors: BTreeMap<String, ExecutorSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutorSpec {
    pub container: ContainerSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub args: Vec<String>,
    pub command: Vec<String>,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DagSpec {
    pub outputs: DagOutputs,
    pub tasks: BTreeMap<String, TaskSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DagOutputs {
    pub parameters: BTreeMap<String, DagOutputParameter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DagOutputParameter {
    pub value_from_parameter: ValueFromParameter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueFromParameter {
    pub output_parameter_key: String,
    pub producer_subtask: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSpec {
    pub caching_options: CachingOptions,
    pub component_ref: ComponentRef,
    pub inputs: TaskInputs,
    pub task_info: TaskInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachingOptions {
    pub enable_cache: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskInputs {
    pub parameters: BTreeMap<String, TaskInputParameter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInputParameter {
    pub component_input_parameter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskInfo {
    pub name: String,
}
