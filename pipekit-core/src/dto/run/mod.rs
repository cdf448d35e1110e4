//! Run DTOs

use serde::{Deserialize, Serialize};

use crate::domain::parameter::Arguments;

/// Request to create a run from an inline pipeline spec
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRun {
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiment_id: Option<String>,
    /// The compiled artifact, as a JSON document
    pub pipeline_spec: serde_json::Value,
    pub runtime_config: RuntimeConfig,
}

/// Argument values and storage root for a run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub parameters: Arguments,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_root: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_run_wire_format() {
        let mut parameters = Arguments::new();
        parameters.insert("recipient".to_string(), "World".to_string());

        let req = CreateRun {
            display_name: "hello".to_string(),
            description: None,
            experiment_id: None,
            pipeline_spec: serde_json::json!({ "pipelineInfo": { "name": "hello" } }),
            runtime_config: RuntimeConfig {
                parameters,
                pipeline_root: None,
            },
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["runtime_config"]["parameters"]["recipient"], "World");
        assert!(json.get("experiment_id").is_none());
        assert!(json["runtime_config"].get("pipeline_root").is_none());
    }
}
