//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod compile;
mod execute;
mod hello;
mod local;
mod submit;

use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

use crate::config::Config;
use crate::types::parse_key_val;

/// Default location of the compiled package
pub const DEFAULT_PACKAGE: &str = "pipeline.yaml";

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Compile the hello pipeline and submit it in one go
    Hello {
        /// Where to write the compiled package
        #[arg(short, long, default_value = DEFAULT_PACKAGE)]
        output: PathBuf,

        /// Who to greet
        #[arg(short, long, default_value = "World")]
        recipient: String,

        /// Experiment to file the run under
        #[arg(short, long)]
        experiment: Option<String>,

        /// Display name for the run
        #[arg(long)]
        run_name: Option<String>,
    },
    /// Compile the hello pipeline to a package
    Compile {
        /// Where to write the compiled package
        #[arg(short, long, default_value = DEFAULT_PACKAGE)]
        output: PathBuf,
    },
    /// Submit a compiled package as a new run
    Submit {
        /// Path to the compiled package
        #[arg(long, default_value = DEFAULT_PACKAGE)]
        package: PathBuf,

        /// Parameters as key=value pairs (e.g., recipient=World)
        #[arg(short, long, value_parser = parse_key_val)]
        param: Vec<(String, String)>,

        /// Experiment to file the run under
        #[arg(short, long)]
        experiment: Option<String>,

        /// Display name for the run
        #[arg(long)]
        run_name: Option<String>,
    },
    /// Show the state of a run
    Status {
        /// Run ID returned at submission
        run_id: String,
    },
    /// Evaluate the hello pipeline in-process
    Local {
        /// Parameters as key=value pairs (e.g., recipient=World)
        #[arg(short, long, value_parser = parse_key_val)]
        param: Vec<(String, String)>,
    },
    /// Execute a component inside its container (used by compiled packages)
    Execute {
        /// Component to execute
        #[arg(long)]
        component: String,

        /// Executor input document
        #[arg(long)]
        executor_input: String,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Hello {
            output,
            recipient,
            experiment,
            run_name,
        } => hello::handle_hello(config, output, recipient, experiment, run_name).await,
        Commands::Compile { output } => compile::handle_compile(config, &output),
        Commands::Submit {
            package,
            param,
            experiment,
            run_name,
        } => submit::handle_submit(config, &package, param, experiment, run_name).await,
        Commands::Status { run_id } => submit::handle_status(config, &run_id).await,
        Commands::Local { param } => local::handle_local(param),
        Commands::Execute {
            component,
            executor_input,
        } => execute::handle_execute(&component, &executor_input),
    }
}
