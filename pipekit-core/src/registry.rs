//! Component registry
//!
//! Provides a central place to register components and look them up by
//! name. The executor uses it to find the component a container was
//! started for.

use crate::domain::component::Component;

/// Registry of known components
pub struct ComponentRegistry {
    components: Vec<Component>,
}

impl ComponentRegistry {
    /// Creates a new empty registry
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Registers a component
    ///
    /// # Panics
    /// Panics if a component with the same name is already registered
    pub fn register(&mut self, component: Component) {
        if self.get(&component.name).is_some() {
            panic!("Component '{}' is already registered", component.name);
        }
        self.components.push(component);
    }

    /// Gets a component by name
    pub fn get(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Returns all registered components
    pub fn components(&self) -> &[Component] {
        &self.components
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parameter::{ParameterSpec, ParameterType};

    fn identity(input: &str) -> String {
        input.to_string()
    }

    fn test_component() -> Component {
        Component::new(
            "identity",
            ParameterSpec::string("value"),
            ParameterType::String,
            identity,
        )
    }

    #[test]
    fn test_component_registration() {
        let mut registry = ComponentRegistry::new();
        registry.register(test_component());

        assert!(registry.get("identity").is_some());
        assert!(registry.get("nonexistent").is_none());
        assert_eq!(registry.components().len(), 1);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_registration() {
        let mut registry = ComponentRegistry::new();
        registry.register(test_component());
        registry.register(test_component());
    }
}
