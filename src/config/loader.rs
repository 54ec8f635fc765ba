//! Config file loading

use crate::config::{EngineConfig, ENV_PREFIX};
use anyhow::{Context, Result};
use figment::providers::{Env, Serialized};
use figment::Figment;
use std::fs;
use std::path::{Path, PathBuf};

/// Section name a config file may nest its settings under.
const NESTED_SECTION: &str = "footnotes";

/// Load the engine configuration.
///
/// An explicit `config_path` must exist and parse. Without one, the first
/// known config file in `dir` is used; if it fails to parse it is logged and
/// ignored. Environment variables prefixed with `FOOTNOTES_` are applied last,
/// using `__` to reach nested fields.
pub fn load_config(dir: &Path, config_path: Option<&Path>) -> Result<EngineConfig> {
    let file_config = load_file_config(dir, config_path)?;

    Figment::from(Serialized::defaults(file_config))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .context("Invalid configuration from environment")
}

fn load_file_config(dir: &Path, config_path: Option<&Path>) -> Result<EngineConfig> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(dir),
    };

    let Some(config_file) = discovered else {
        return Ok(EngineConfig::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, &config_file),
        "yaml" | "yml" => parse_yaml_config(&content, &config_file),
        other => Err(anyhow::anyhow!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        )),
    };

    match parsed {
        Ok(cfg) => {
            tracing::debug!("loaded config from {}", config_file.display());
            Ok(cfg)
        }
        Err(e) if !config_path_provided => {
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(EngineConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Parse TOML config, supporting a nested `[footnotes]` section.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<EngineConfig> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(NESTED_SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, supporting a nested `footnotes` section.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<EngineConfig> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(NESTED_SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    // An empty file parses to null; treat it as "no settings".
    if config_val.is_null() {
        return Ok(EngineConfig::default());
    }

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(dir: &Path) -> Option<PathBuf> {
    let candidates = ["footnotes.toml", ".footnotes.toml", "footnotes.yml", "footnotes.yaml"];

    candidates.iter().map(|candidate| dir.join(candidate)).find(|path| path.exists())
}
