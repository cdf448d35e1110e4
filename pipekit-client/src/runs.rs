//! Run-related API endpoints

use async_trait::async_trait;
use chrono::Utc;
use pipekit_compiler::load_package;
use pipekit_core::Arguments;
use pipekit_core::domain::run::RunHandle;
use pipekit_core::dto::run::{CreateRun, RuntimeConfig};
use reqwest::Method;
use std::path::Path;
use tracing::{debug, info};

use crate::PipelineClient;
use crate::error::Result;

/// Optional settings for a run created from a package
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Display name; defaults to "<pipeline> <timestamp>"
    pub run_name: Option<String>,
    /// Experiment to file the run under, created if it does not exist
    pub experiment_name: Option<String>,
    /// Storage root for run artifacts
    pub pipeline_root: Option<String>,
}

/// Something that can submit a compiled package for execution
#[async_trait]
pub trait RunSubmitter: Send + Sync {
    /// Submits the package at `package_path` with `arguments`
    ///
    /// # Returns
    /// A handle to the created run
    async fn submit(
        &self,
        package_path: &Path,
        arguments: Arguments,
        options: &RunOptions,
    ) -> Result<RunHandle>;
}

impl PipelineClient {
    // =============================================================================
    // Runs
    // =============================================================================

    /// Create a run
    ///
    /// # Arguments
    /// * `req` - The run creation request
    ///
    /// # Returns
    /// The created run
    pub async fn create_run(&self, req: CreateRun) -> Result<RunHandle> {
        let response = self.request(Method::POST, "runs").json(&req).send().await?;

        self.handle_response(response).await
    }

    /// Get a run by ID
    ///
    /// # Arguments
    /// * `run_id` - The run ID returned at creation
    pub async fn get_run(&self, run_id: &str) -> Result<RunHandle> {
        let url = self.resource_url("runs", run_id)?;
        let response = self.request_url(Method::GET, url).send().await?;

        self.handle_response(response).await
    }

    /// Create a run from a compiled package on disk
    ///
    /// Loads the package, resolves the experiment (if one is named), and
    /// submits the run with `arguments` as its parameters.
    ///
    /// # Example
    /// ```no_run
    /// # use pipekit_client::{PipelineClient, RunOptions};
    /// # use std::path::Path;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = PipelineClient::new("http://localhost:8080");
    /// let arguments = [("recipient".to_string(), "World".to_string())].into();
    /// let run = client
    ///     .create_run_from_pipeline_package(Path::new("pipeline.yaml"), arguments, &RunOptions::default())
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_run_from_pipeline_package(
        &self,
        package_path: &Path,
        arguments: Arguments,
        options: &RunOptions,
    ) -> Result<RunHandle> {
        let package = load_package(package_path)?;
        debug!(
            "Loaded package '{}' from {}",
            package.name,
            package_path.display()
        );

        let experiment_id = match &options.experiment_name {
            Some(name) => Some(self.get_or_create_experiment(name).await?.experiment_id),
            None => None,
        };

        let display_name = options
            .run_name
            .clone()
            .unwrap_or_else(|| default_run_name(&package.name));

        let req = CreateRun {
            display_name,
            description: None,
            experiment_id,
            pipeline_spec: package.spec,
            runtime_config: RuntimeConfig {
                parameters: arguments,
                pipeline_root: options.pipeline_root.clone(),
            },
        };

        let run = self.create_run(req).await?;
        info!("Created run {}", run.run_id);
        Ok(run)
    }
}

#[async_trait]
impl RunSubmitter for PipelineClient {
    async fn submit(
        &self,
        package_path: &Path,
        arguments: Arguments,
        options: &RunOptions,
    ) -> Result<RunHandle> {
        self.create_run_from_pipeline_package(package_path, arguments, options)
            .await
    }
}

fn default_run_name(pipeline_name: &str) -> String {
    format!(
        "{} {}",
        pipeline_name,
        Utc::now().format("%Y-%m-%d %H-%M-%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_run_name() {
        let name = default_run_name("hello-pipeline");
        assert!(name.starts_with("hello-pipeline "));
        // "YYYY-MM-DD HH-MM-SS"
        assert_eq!(name.len(), "hello-pipeline ".len() + 19);
    }
}
