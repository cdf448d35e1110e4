//! Component domain types
//!
//! A component is a single named unit of work: one typed input, one typed
//! output, and a plain function body. Declaring one is explicit
//! registration rather than annotation; the descriptor is all the compiler
//! and the executor need.

use crate::domain::parameter::{ParameterSpec, ParameterType};

/// Name of the single output every component exposes
pub const OUTPUT_KEY: &str = "Output";

/// Function body of a component
pub type ComponentBody = fn(&str) -> String;

/// Descriptor for a single unit of work
///
/// Immutable once built; pipelines hold it by value and the executor looks
/// it up by `name`.
#[derive(Debug, Clone)]
pub struct Component {
    pub name: String,
    pub input: ParameterSpec,
    pub output: ParameterType,
    body: ComponentBody,
}

impl Component {
    /// Creates a component descriptor
    ///
    /// # Arguments
    /// * `name` - Identifier used for IR references (`comp-<name>`, `exec-<name>`)
    /// * `input` - The single input parameter
    /// * `output` - Type of the value `body` returns
    /// * `body` - The work itself
    pub fn new(
        name: impl Into<String>,
        input: ParameterSpec,
        output: ParameterType,
        body: ComponentBody,
    ) -> Self {
        Self {
            name: name.into(),
            input,
            output,
            body,
        }
    }

    /// Runs the component body on `input`
    pub fn invoke(&self, input: &str) -> String {
        tracing::debug!(component = %self.name, "Invoking component");
        (self.body)(input)
    }

    /// IR key of this component's definition
    pub fn component_ref(&self) -> String {
        format!("comp-{}", self.name)
    }

    /// IR key of this component's executor
    pub fn executor_label(&self) -> String {
        format!("exec-{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shout(input: &str) -> String {
        input.to_uppercase()
    }

    #[test]
    fn test_invoke_calls_body() {
        let component = Component::new(
            "shout",
            ParameterSpec::string("text"),
            ParameterType::String,
            shout,
        );
        assert_eq!(component.invoke("hi"), "HI");
    }

    #[test]
    fn test_ir_names() {
        let component = Component::new(
            "say-hello",
            ParameterSpec::string("name"),
            ParameterType::String,
            shout,
        );

        assert_eq!(component.component_ref(), "comp-say-hello");
        assert_eq!(component.executor_label(), "exec-say-hello");
    }
}
