//! The "say hello" pipeline
//!
//! One component that greets someone, wrapped in a one-node pipeline whose
//! `recipient` parameter feeds the component's `name` input.

use pipekit_core::{Component, ComponentRegistry, ParameterSpec, ParameterType, Pipeline, Task};
use tracing::info;

/// Name of the pipeline's only parameter
pub const RECIPIENT: &str = "recipient";

/// Greets `name`, logging the greeting
pub fn say_hello(name: &str) -> String {
    let hello_text = format!("Hello, {}!", name);
    info!("{}", hello_text);
    hello_text
}

/// Component descriptor for [`say_hello`]
pub fn say_hello_component() -> Component {
    Component::new(
        "say-hello",
        ParameterSpec::string("name"),
        ParameterType::String,
        say_hello,
    )
}

/// The hello pipeline: `recipient -> say-hello -> Output`
pub fn hello_pipeline() -> Pipeline {
    Pipeline::new(
        "hello-pipeline",
        ParameterSpec::string(RECIPIENT),
        Task::new("say-hello", say_hello_component(), RECIPIENT),
    )
}

/// Every component this binary can execute
pub fn registry() -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    registry.register(say_hello_component());
    registry
}
