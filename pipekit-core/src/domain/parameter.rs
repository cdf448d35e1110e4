//! Parameter domain types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Argument values keyed by parameter name
///
/// Ordered so that compiled output and log lines are stable.
pub type Arguments = BTreeMap<String, String>;

/// Scalar parameter kinds understood by the pipeline IR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParameterType {
    String,
    NumberInteger,
    NumberDouble,
    Boolean,
}

impl ParameterType {
    /// Returns true if `value` is a valid textual encoding of this kind
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            ParameterType::String => true,
            ParameterType::NumberInteger => value.parse::<i64>().is_ok(),
            ParameterType::NumberDouble => value.parse::<f64>().is_ok(),
            ParameterType::Boolean => matches!(value, "true" | "false"),
        }
    }
}

impl std::fmt::Display for ParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ParameterType::String => "str",
            ParameterType::NumberInteger => "int",
            ParameterType::NumberDouble => "float",
            ParameterType::Boolean => "bool",
        };
        write!(f, "{}", name)
    }
}

/// A named, typed parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub parameter_type: ParameterType,
}

impl ParameterSpec {
    pub fn new(name: impl Into<String>, parameter_type: ParameterType) -> Self {
        Self {
            name: name.into(),
            parameter_type,
        }
    }

    /// Shorthand for a `STRING` parameter
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, ParameterType::String)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_type_accepts() {
        assert!(ParameterType::String.accepts("anything at all"));
        assert!(ParameterType::NumberInteger.accepts("-42"));
        assert!(!ParameterType::NumberInteger.accepts("4.2"));
        assert!(ParameterType::NumberDouble.accepts("4.2"));
        assert!(ParameterType::Boolean.accepts("true"));
        assert!(!ParameterType::Boolean.accepts("yes"));
    }

    #[test]
    fn test_parameter_type_serializes_as_ir_name() {
        let json = serde_json::to_string(&ParameterType::NumberInteger).unwrap();
        assert_eq!(json, "\"NUMBER_INTEGER\"");
        let json = serde_json::to_string(&ParameterType::String).unwrap();
        assert_eq!(json, "\"STRING\"");
    }
}
