//! Experiment domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named grouping of runs on the pipeline service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experiment {
    pub experiment_id: String,
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
