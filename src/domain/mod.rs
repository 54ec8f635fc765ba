//! Core domain types shared by the settings and template engines

pub mod value;

pub use value::{Record, SettingValue};

/// Template category for dashboard (settings page) templates.
pub const DASHBOARD: &str = "dashboard";

/// Template category for public (front end) templates.
pub const PUBLIC: &str = "public";

/// Extension used when a template is requested without one.
pub const DEFAULT_TEMPLATE_EXTENSION: &str = "html";

/// Opening and closing delimiters of a template placeholder token.
pub const PLACEHOLDER_OPEN: &str = "[[";
pub const PLACEHOLDER_CLOSE: &str = "]]";

/// Build the `[[key]]` token for a placeholder key.
pub fn placeholder_token(key: &str) -> String {
    format!("{PLACEHOLDER_OPEN}{key}{PLACEHOLDER_CLOSE}")
}
