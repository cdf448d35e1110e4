//! Pipeline package I/O
//!
//! A package is the YAML rendering of a [`PipelineSpec`] preceded by a
//! comment header summarising the pipeline interface.

use std::path::Path;

use crate::error::{CompileError, Result};
use crate::ir::{InterfaceDefinitions, PipelineSpec};

/// A compiled package loaded back from disk
#[derive(Debug, Clone)]
pub struct Package {
    /// Pipeline name from `pipelineInfo.name`
    pub name: String,
    /// The whole spec as a JSON document, ready to embed in a request
    pub spec: serde_json::Value,
}

/// Renders `spec` as package text
pub fn to_yaml(spec: &PipelineSpec) -> Result<String> {
    let mut out = header(spec);
    out.push_str(&serde_yaml::to_string(spec)?);
    Ok(out)
}

/// Reads a package from `path`
///
/// # Errors
/// Returns an error if the file cannot be read, is not YAML, or has no
/// `pipelineInfo.name`.
pub fn load_package(path: &Path) -> Result<Package> {
    let text = std::fs::read_to_string(path).map_err(|source| CompileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let spec: serde_json::Value = serde_yaml::from_str(&text)?;

    let name = spec
        .get("pipelineInfo")
        .and_then(|info| info.get("name"))
        .and_then(|name| name.as_str())
        .ok_or_else(|| CompileError::InvalidPackage("missing pipelineInfo.name".to_string()))?
        .to_string();

    Ok(Package { name, spec })
}

fn header(spec: &PipelineSpec) -> String {
    let mut out = String::from("# PIPELINE DEFINITION\n");
    out.push_str(&format!("# Name: {}\n", spec.pipeline_info.name));
    if let Some(description) = &spec.pipeline_info.description {
        // Every line stays behind a comment marker
        let mut lines = description.lines();
        out.push_str(&format!("# Description: {}\n", lines.next().unwrap_or_default()));
        for line in lines {
            out.push_str(&format!("#    {}\n", line));
        }
    }
    write_interface(&mut out, "Inputs", spec.root.input_definitions.as_ref());
    write_interface(&mut out, "Outputs", spec.root.output_definitions.as_ref());
    out
}

fn write_interface(out: &mut String, title: &str, defs: Option<&InterfaceDefinitions>) {
    let Some(defs) = defs.filter(|d| !d.parameters.is_empty()) else {
        return;
    };
    out.push_str(&format!("# {}:\n", title));
    for (name, def) in &defs.parameters {
        out.push_str(&format!("#    {}: {}\n", name, def.parameter_type));
    }
}
