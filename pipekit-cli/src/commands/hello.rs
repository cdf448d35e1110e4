//! `pipekit hello`: compile and submit the hello pipeline

use anyhow::Result;
use colored::*;
use pipekit_client::RunOptions;
use pipekit_compiler::Compiler;
use pipekit_core::Arguments;
use std::path::PathBuf;

use crate::config::Config;
use crate::driver::SubmissionDriver;
use crate::hello::{RECIPIENT, hello_pipeline};

pub async fn handle_hello(
    config: &Config,
    output: PathBuf,
    recipient: String,
    experiment: Option<String>,
    run_name: Option<String>,
) -> Result<()> {
    let driver = SubmissionDriver {
        endpoint: config.endpoint.clone(),
        package_path: output,
        compiler: Compiler::new(config.compile_options()),
        options: RunOptions {
            run_name,
            experiment_name: experiment,
            pipeline_root: None,
        },
    };

    let mut arguments = Arguments::new();
    arguments.insert(RECIPIENT.to_string(), recipient);

    let run = driver
        .run(&hello_pipeline(), arguments, |endpoint| {
            config.client_for(endpoint)
        })
        .await?;

    println!("{}", "✓ Run submitted successfully!".green().bold());
    println!("  Run ID:  {}", run.run_id.cyan());
    println!("  Package: {}", driver.package_path.display().to_string().dimmed());
    if let Some(name) = &run.display_name {
        println!("  Name:    {}", name.bold());
    }

    Ok(())
}
