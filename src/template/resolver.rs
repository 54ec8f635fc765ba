//! Template search path
//!
//! ORDER MATTERS: resolvers are consulted most specific first, and the first
//! one whose candidate file exists wins:
//! 1. active theme override directory
//! 2. parent theme override directory (child themes only)
//! 3. sibling custom plugin directory
//! 4. templates bundled with the plugin

use crate::config::TemplateConfig;
use crate::template::descriptor::TemplateDescriptor;
use crate::template::fs::FileSystem;
use std::path::{Path, PathBuf};

/// Directory holding templates inside the custom and bundled roots.
const TEMPLATES_DIR: &str = "templates";

/// One candidate location for template files.
pub trait TemplateResolver {
    /// Short name used in logs.
    fn label(&self) -> &str;

    /// Path of the template under this resolver, if the file exists.
    fn try_resolve(&self, descriptor: &TemplateDescriptor, fs: &dyn FileSystem) -> Option<PathBuf>;
}

/// Resolves templates under `<root>/<subpath>/<type>/<name>.<ext>`.
#[derive(Debug, Clone, PartialEq)]
pub struct RootResolver {
    label: String,
    base: PathBuf,
}

impl RootResolver {
    pub fn new(label: impl Into<String>, root: &Path, subpath: &str) -> Self {
        // A leading slash would make `join` discard the root.
        let subpath = subpath.trim_start_matches(['/', '\\']);
        Self { label: label.into(), base: root.join(subpath) }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn candidate(&self, descriptor: &TemplateDescriptor) -> PathBuf {
        self.base.join(descriptor.relative_path())
    }
}

impl TemplateResolver for RootResolver {
    fn label(&self) -> &str {
        &self.label
    }

    fn try_resolve(&self, descriptor: &TemplateDescriptor, fs: &dyn FileSystem) -> Option<PathBuf> {
        let candidate = self.candidate(descriptor);
        fs.exists(&candidate).then_some(candidate)
    }
}

/// Ordered list of resolvers.
#[derive(Default)]
pub struct SearchPath {
    resolvers: Vec<Box<dyn TemplateResolver>>,
}

impl SearchPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resolver with lower priority than every existing one.
    pub fn push(mut self, resolver: impl TemplateResolver + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    /// Build the standard chain from configured roots. Unset roots are
    /// skipped, as is a parent theme identical to the active theme.
    pub fn from_config(config: &TemplateConfig) -> Self {
        let mut path = Self::new();

        if let Some(theme) = &config.theme_root {
            path = path.push(RootResolver::new("theme", theme, &config.template_subpath));
        }
        if let Some(parent) = &config.parent_theme_root {
            if config.theme_root.as_ref() != Some(parent) {
                path = path.push(RootResolver::new("parent-theme", parent, &config.template_subpath));
            }
        }
        if let Some(plugins) = &config.plugins_root {
            let custom = Path::new(&config.custom_subpath).join(TEMPLATES_DIR);
            path = path.push(RootResolver::new("custom", plugins, &custom.to_string_lossy()));
        }
        path.push(RootResolver::new("bundled", &config.plugin_root, TEMPLATES_DIR))
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.resolvers.iter().map(|r| r.label()).collect()
    }

    /// First existing candidate for `descriptor`, in priority order.
    pub fn resolve(&self, descriptor: &TemplateDescriptor, fs: &dyn FileSystem) -> Option<PathBuf> {
        for resolver in &self.resolvers {
            if let Some(path) = resolver.try_resolve(descriptor, fs) {
                tracing::debug!(
                    template = %descriptor,
                    source = resolver.label(),
                    "resolved template to {}",
                    path.display()
                );
                return Some(path);
            }
        }
        tracing::debug!(template = %descriptor, "template not found in search path");
        None
    }
}
