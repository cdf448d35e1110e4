//! `pipekit local`: evaluate the hello pipeline without a service

use anyhow::{Context, Result};
use colored::*;

use crate::hello::hello_pipeline;
use crate::types::to_arguments;

pub fn handle_local(params: Vec<(String, String)>) -> Result<()> {
    let pipeline = hello_pipeline();
    let output = pipeline
        .run_local(&to_arguments(params))
        .with_context(|| format!("Failed to run pipeline '{}' locally", pipeline.name))?;

    println!("{}", "✓ Pipeline finished".green().bold());
    println!("  Output: {}", output.cyan());

    Ok(())
}
