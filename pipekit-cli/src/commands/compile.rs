//! `pipekit compile`: write the hello pipeline package

use anyhow::{Context, Result};
use colored::*;
use pipekit_compiler::Compiler;
use std::path::Path;

use crate::config::Config;
use crate::hello::hello_pipeline;

pub fn handle_compile(config: &Config, output: &Path) -> Result<()> {
    let pipeline = hello_pipeline();
    let spec = Compiler::new(config.compile_options())
        .compile_to_file(&pipeline, output)
        .with_context(|| format!("Failed to compile pipeline '{}'", pipeline.name))?;

    println!("{}", "✓ Pipeline compiled successfully!".green().bold());
    println!("  Name:    {}", spec.pipeline_info.name.bold());
    println!("  Package: {}", output.display().to_string().cyan());
    println!(
        "  Tasks:   {}",
        spec.root
            .dag
            .as_ref()
            .map(|dag| dag.tasks.keys().cloned().collect::<Vec<_>>().join(", "))
            .unwrap_or_default()
            .dimmed()
    );

    Ok(())
}
