//! Pipekit CLI
//!
//! Compiles the hello pipeline, submits it to a pipeline service, and acts
//! as the container entrypoint for the compiled executor.

mod commands;
mod config;
mod driver;
mod hello;
mod types;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::{Config, ENDPOINT_ENV, EndpointSource};
use pipekit_compiler::DEFAULT_EXECUTOR_IMAGE;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pipekit")]
#[command(about = "Pipekit pipeline CLI", long_about = None)]
struct Cli {
    /// Pipeline service URL [default: value of KFP_ENDPOINT]
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Bearer token for the pipeline service
    #[arg(long, env = "KFP_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    /// Image compiled executors run in
    #[arg(
        long,
        env = "PIPEKIT_EXECUTOR_IMAGE",
        default_value = DEFAULT_EXECUTOR_IMAGE,
        global = true
    )]
    image: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pipekit=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        endpoint: match cli.endpoint {
            Some(url) => EndpointSource::Literal(url),
            None => EndpointSource::Environment(ENDPOINT_ENV),
        },
        token: cli.token,
        image: cli.image,
    };

    handle_command(cli.command, &config).await
}
