//! Common types and parsers used across CLI modules

use anyhow::Result;
use pipekit_core::Arguments;

/// Parse a single key=value pair
pub fn parse_key_val(s: &str) -> Result<(String, String)> {
    let pos = s
        .find('=')
        .ok_or_else(|| anyhow::anyhow!("invalid KEY=value: no `=` found in `{}`", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Collect parsed pairs into run arguments; later keys win
pub fn to_arguments(pairs: Vec<(String, String)>) -> Arguments {
    pairs.into_iter().collect()
}
