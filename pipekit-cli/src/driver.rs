//! Submission driver
//!
//! Runs the fixed sequence behind `pipekit hello`:
//! resolve endpoint, compile the package, connect, submit.
//! Every failure ends the sequence; nothing is retried.

use anyhow::{Context, Result};
use pipekit_client::{RunOptions, RunSubmitter};
use pipekit_compiler::Compiler;
use pipekit_core::domain::run::RunHandle;
use pipekit_core::{Arguments, Pipeline};
use std::path::PathBuf;
use tracing::info;

use crate::config::EndpointSource;

/// Progress through the submission sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    Compiled,
    Submitted,
    Done,
}

/// Compiles a pipeline and submits it as a single run
pub struct SubmissionDriver {
    pub endpoint: EndpointSource,
    pub package_path: PathBuf,
    pub compiler: Compiler,
    pub options: RunOptions,
}

impl SubmissionDriver {
    /// Runs the sequence for `pipeline` with `arguments`
    ///
    /// `connect` builds the submitter for the resolved endpoint; it is only
    /// called once the package has been written.
    ///
    /// # Errors
    /// Returns the first failure: endpoint resolution, argument binding,
    /// compilation, or submission.
    pub async fn run<S, F>(
        &self,
        pipeline: &Pipeline,
        arguments: Arguments,
        connect: F,
    ) -> Result<RunHandle>
    where
        S: RunSubmitter,
        F: FnOnce(&str) -> S,
    {
        info!(stage = ?Stage::Start, "Submitting pipeline '{}'", pipeline.name);

        let endpoint = self
            .endpoint
            .resolve()
            .context("Failed to resolve pipeline service endpoint")?;

        pipeline
            .bind(&arguments)
            .context("Arguments do not match the pipeline parameters")?;

        self.compiler
            .compile_to_file(pipeline, &self.package_path)
            .with_context(|| format!("Failed to compile pipeline '{}'", pipeline.name))?;
        info!(stage = ?Stage::Compiled, "Package written to {}", self.package_path.display());

        let submitter = connect(&endpoint);
        let run = submitter
            .submit(&self.package_path, arguments, &self.options)
            .await
            .with_context(|| format!("Failed to submit pipeline to {}", endpoint))?;
        info!(stage = ?Stage::Submitted, "Run {} created", run.run_id);

        info!(stage = ?Stage::Done, "Submission complete");
        Ok(run)
    }
}
