//! Template descriptors

use crate::domain::DEFAULT_TEMPLATE_EXTENSION;
use std::fmt;

/// Identifies a logical template: `<file_type>/<file_name>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateDescriptor {
    pub file_type: String,
    pub file_name: String,
    pub extension: String,
}

impl TemplateDescriptor {
    pub fn new(file_type: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            file_type: file_type.into(),
            file_name: file_name.into(),
            extension: DEFAULT_TEMPLATE_EXTENSION.to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// A descriptor without a type or a name can never be resolved.
    pub fn is_valid(&self) -> bool {
        !self.file_type.is_empty() && !self.file_name.is_empty()
    }

    /// Path relative to any template root, always `/`-separated.
    pub fn relative_path(&self) -> String {
        format!("{}/{}.{}", self.file_type, self.file_name, self.extension)
    }
}

impl fmt::Display for TemplateDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.relative_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DASHBOARD, PUBLIC};

    #[test]
    fn relative_path_uses_default_extension() {
        let descriptor = TemplateDescriptor::new(PUBLIC, "footnote");
        assert_eq!(descriptor.relative_path(), "public/footnote.html");
    }

    #[test]
    fn extension_can_be_overridden() {
        let descriptor = TemplateDescriptor::new(DASHBOARD, "manual-notice").with_extension("txt");
        assert_eq!(descriptor.to_string(), "dashboard/manual-notice.txt");
    }

    #[test]
    fn empty_type_or_name_is_invalid() {
        assert!(!TemplateDescriptor::new("", "x").is_valid());
        assert!(!TemplateDescriptor::new(PUBLIC, "").is_valid());
        assert!(TemplateDescriptor::new(PUBLIC, "x").is_valid());
    }
}
