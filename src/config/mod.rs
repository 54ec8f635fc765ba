//! Engine configuration
//!
//! Template search roots, the two override sub-paths and the option store
//! location. Loaded from a config file with environment overrides on top
//! (Env > File > Defaults).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod loader;

pub use loader::load_config;

/// Sub-path under a theme root where template overrides live.
pub const DEFAULT_TEMPLATE_SUBPATH: &str = "footnotes/templates/";

/// Sibling plugin directory holding custom templates.
pub const DEFAULT_CUSTOM_SUBPATH: &str = "footnotes-custom/";

/// Prefix for environment overrides, e.g. `FOOTNOTES_TEMPLATE__THEME_ROOT`.
pub const ENV_PREFIX: &str = "FOOTNOTES_";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub template: TemplateConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Override sub-path consulted under both theme roots.
    pub template_subpath: String,
    /// Override sub-path consulted under `plugins_root`.
    pub custom_subpath: String,
    /// Active theme directory.
    pub theme_root: Option<PathBuf>,
    /// Parent theme directory when the active theme is a child theme.
    pub parent_theme_root: Option<PathBuf>,
    /// Directory containing all plugins (parent of the custom directory).
    pub plugins_root: Option<PathBuf>,
    /// This plugin's own directory; its `templates/` is the fallback.
    pub plugin_root: PathBuf,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            template_subpath: DEFAULT_TEMPLATE_SUBPATH.to_string(),
            custom_subpath: DEFAULT_CUSTOM_SUBPATH.to_string(),
            theme_root: None,
            parent_theme_root: None,
            plugins_root: None,
            plugin_root: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// SQLite database holding the option records.
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { path: PathBuf::from("footnotes.db") }
    }
}
