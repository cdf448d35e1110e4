//! Experiment-related API endpoints

use pipekit_core::domain::experiment::Experiment;
use pipekit_core::dto::experiment::{CreateExperiment, Filter, ListExperiments};
use reqwest::Method;
use tracing::info;

use crate::PipelineClient;
use crate::error::{ClientError, Result};

impl PipelineClient {
    // =============================================================================
    // Experiments
    // =============================================================================

    /// Create a new experiment
    pub async fn create_experiment(&self, name: &str) -> Result<Experiment> {
        let req = CreateExperiment {
            display_name: name.to_string(),
            description: None,
        };
        let response = self
            .request(Method::POST, "experiments")
            .json(&req)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Find an experiment by display name
    ///
    /// # Returns
    /// The first experiment whose display name equals `name`, if any
    pub async fn find_experiment(&self, name: &str) -> Result<Option<Experiment>> {
        let filter = serde_json::to_string(&Filter::display_name_equals(name))
            .map_err(|e| ClientError::ParseError(format!("Failed to encode filter: {}", e)))?;

        let response = self
            .request(Method::GET, "experiments")
            .query(&[("filter", filter.as_str()), ("page_size", "1")])
            .send()
            .await?;

        let page: ListExperiments = self.handle_response(response).await?;
        Ok(page
            .experiments
            .into_iter()
            .find(|e| e.display_name == name))
    }

    /// Find an experiment by name, creating it if it does not exist
    pub async fn get_or_create_experiment(&self, name: &str) -> Result<Experiment> {
        if let Some(experiment) = self.find_experiment(name).await? {
            return Ok(experiment);
        }

        info!("Creating experiment '{}'", name);
        self.create_experiment(name).await
    }
}
