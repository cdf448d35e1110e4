//! `pipekit execute`: container entrypoint for compiled executors

use anyhow::{Context, Result};
use pipekit_core::executor;
use tracing::info;

use crate::hello::registry;

pub fn handle_execute(component: &str, executor_input: &str) -> Result<()> {
    let output = executor::execute(&registry(), component, executor_input)
        .with_context(|| format!("Failed to execute component '{}'", component))?;

    info!(
        "Component '{}' produced {}",
        component,
        serde_json::to_string(&output.parameter_values)?
    );

    Ok(())
}
