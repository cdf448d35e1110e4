//! Experiment DTOs

use serde::{Deserialize, Serialize};

use crate::domain::experiment::Experiment;

/// Request to create a new experiment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExperiment {
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Page of experiments returned by the list endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListExperiments {
    #[serde(default)]
    pub experiments: Vec<Experiment>,
    #[serde(default)]
    pub total_size: i32,
    #[serde(default)]
    pub next_page_token: String,
}

/// Server-side list filter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Filter {
    pub predicates: Vec<Predicate>,
}

/// Single filter predicate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Predicate {
    pub key: String,
    pub operation: String,
    pub string_value: String,
}

impl Filter {
    /// Filter matching resources whose display name equals `name`
    pub fn display_name_equals(name: impl Into<String>) -> Self {
        Self {
            predicates: vec![Predicate {
                key: "display_name".to_string(),
                operation: "EQUALS".to_string(),
                string_value: name.into(),
            }],
        }
    }
}
