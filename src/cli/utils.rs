//! Shared CLI utilities.

use anyhow::{bail, Result};

/// Split a `KEY=VALUE` argument. The value may itself contain `=`.
pub fn parse_assignment(arg: &str) -> Result<(String, String)> {
    match arg.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => bail!("Expected KEY=VALUE, got '{}'", arg),
    }
}
