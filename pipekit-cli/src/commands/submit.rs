//! `pipekit submit` and `pipekit status`

use anyhow::{Context, Result};
use colored::*;
use pipekit_client::{RunOptions, RunSubmitter};
use pipekit_core::domain::run::{RunHandle, RunState};
use std::path::Path;

use crate::config::Config;
use crate::types::to_arguments;

/// Submit an existing package
pub async fn handle_submit(
    config: &Config,
    package: &Path,
    params: Vec<(String, String)>,
    experiment: Option<String>,
    run_name: Option<String>,
) -> Result<()> {
    let client = config.connect()?;
    let options = RunOptions {
        run_name,
        experiment_name: experiment,
        pipeline_root: None,
    };

    let run = client
        .submit(package, to_arguments(params), &options)
        .await
        .with_context(|| format!("Failed to submit {}", package.display()))?;

    println!("{}", "✓ Run submitted successfully!".green().bold());
    print_run(&run);

    Ok(())
}

/// Show the state of a run
pub async fn handle_status(config: &Config, run_id: &str) -> Result<()> {
    let client = config.connect()?;
    let run = client.get_run(run_id).await?;

    println!("{}", "Run Details:".bold());
    print_run(&run);

    Ok(())
}

fn print_run(run: &RunHandle) {
    println!("  Run ID:   {}", run.run_id.cyan());
    if let Some(name) = &run.display_name {
        println!("  Name:     {}", name.bold());
    }
    if let Some(experiment) = &run.experiment_id {
        println!("  Experiment: {}", experiment.dimmed());
    }
    println!("  State:    {}", colored_state(run.state));
    if let Some(created) = run.created_at {
        println!("  Created:  {}", created.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(finished) = run.finished_at {
        println!("  Finished: {}", finished.format("%Y-%m-%d %H:%M:%S"));
    }
}

fn colored_state(state: RunState) -> ColoredString {
    let text = format!("{:?}", state);
    match state {
        RunState::Succeeded => text.green(),
        RunState::Failed | RunState::Canceled => text.red(),
        _ if state.is_terminal() => text.dimmed(),
        _ => text.yellow(),
    }
}
