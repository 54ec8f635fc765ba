//! Template resolution and rendering
//!
//! A template is located through the [`SearchPath`], decoded, normalized
//! once, and then rendered by substituting `[[key]]` placeholders into a
//! working copy that can be reset at any time.

pub mod descriptor;
pub mod fs;
pub mod normalize;
pub mod placeholders;
pub mod resolver;

pub use descriptor::TemplateDescriptor;
pub use fs::{FileSystem, LocalFileSystem, MemoryFileSystem};
pub use normalize::normalize;
pub use placeholders::Placeholders;
pub use resolver::{RootResolver, SearchPath, TemplateResolver};

use crate::config::TemplateConfig;
use crate::domain::placeholder_token;
use crate::utils::decode_bytes;
use std::path::{Path, PathBuf};

/// A resolved template and its rendered working copy.
///
/// A template that could not be resolved is in the null state: it has no
/// source and empty content, and `replace` always reports failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    descriptor: TemplateDescriptor,
    source: Option<PathBuf>,
    original_content: String,
    replaced_content: String,
}

impl Template {
    fn null(descriptor: TemplateDescriptor) -> Self {
        Self {
            descriptor,
            source: None,
            original_content: String::new(),
            replaced_content: String::new(),
        }
    }

    fn loaded(descriptor: TemplateDescriptor, source: PathBuf, raw: &str) -> Self {
        let mut template = Self {
            descriptor,
            source: Some(source),
            original_content: normalize(raw),
            replaced_content: String::new(),
        };
        template.reload();
        template
    }

    pub fn descriptor(&self) -> &TemplateDescriptor {
        &self.descriptor
    }

    /// Path the content was read from, `None` in the null state.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    /// Normalized content as loaded, before any substitution.
    pub fn original_content(&self) -> &str {
        &self.original_content
    }

    /// Current working copy.
    pub fn content(&self) -> &str {
        &self.replaced_content
    }

    /// Substitute every `[[key]]` occurrence for each entry, one entry at a
    /// time in order. Text inserted by an entry is only seen by the entries
    /// after it.
    ///
    /// Returns `false` without touching the content when `placeholders` is
    /// empty or the working copy is empty.
    pub fn replace(&mut self, placeholders: &Placeholders) -> bool {
        if placeholders.is_empty() || self.replaced_content.is_empty() {
            return false;
        }
        for (key, value) in placeholders.iter() {
            let token = placeholder_token(key);
            if self.replaced_content.contains(&token) {
                self.replaced_content = self.replaced_content.replace(&token, value);
            }
        }
        true
    }

    /// Discard all substitutions.
    pub fn reload(&mut self) {
        self.replaced_content.clone_from(&self.original_content);
    }
}

/// Resolves and loads templates through a search path and a filesystem.
pub struct TemplateEngine {
    search_path: SearchPath,
    fs: Box<dyn FileSystem>,
}

impl TemplateEngine {
    pub fn new(search_path: SearchPath, fs: impl FileSystem + 'static) -> Self {
        Self { search_path, fs: Box::new(fs) }
    }

    /// Engine over the local filesystem using the configured roots.
    pub fn from_config(config: &TemplateConfig) -> Self {
        Self::new(SearchPath::from_config(config), LocalFileSystem)
    }

    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    /// Path of the highest priority file for `descriptor`.
    pub fn locate(&self, descriptor: &TemplateDescriptor) -> Option<PathBuf> {
        if !descriptor.is_valid() {
            return None;
        }
        self.search_path.resolve(descriptor, self.fs.as_ref())
    }

    /// Load `<file_type>/<file_name>.html`.
    pub fn template(&self, file_type: &str, file_name: &str) -> Template {
        self.load(TemplateDescriptor::new(file_type, file_name))
    }

    pub fn template_with_extension(&self, file_type: &str, file_name: &str, extension: &str) -> Template {
        self.load(TemplateDescriptor::new(file_type, file_name).with_extension(extension))
    }

    /// Load a template, falling back to the null state when it is invalid,
    /// missing, or unreadable.
    pub fn load(&self, descriptor: TemplateDescriptor) -> Template {
        if !descriptor.is_valid() {
            tracing::debug!(template = %descriptor, "empty template type or name");
            return Template::null(descriptor);
        }

        let Some(path) = self.locate(&descriptor) else {
            tracing::warn!(template = %descriptor, "template not found");
            return Template::null(descriptor);
        };

        match self.fs.read(&path) {
            Ok(bytes) => {
                let (raw, encoding) = decode_bytes(&bytes);
                tracing::debug!(template = %descriptor, encoding, "loaded {}", path.display());
                Template::loaded(descriptor, path, &raw)
            }
            Err(e) => {
                tracing::warn!(template = %descriptor, "failed to read {}: {}", path.display(), e);
                Template::null(descriptor)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PUBLIC;
    use similar_asserts::assert_eq;
    use std::fs as stdfs;
    use std::io;
    use tempfile::TempDir;

    const BUNDLED: &str = "/plugin/templates";

    fn engine_with(files: &[(&str, &str)]) -> TemplateEngine {
        let config = TemplateConfig {
            theme_root: Some(PathBuf::from("/theme")),
            plugin_root: PathBuf::from("/plugin"),
            ..TemplateConfig::default()
        };
        let fs = files
            .iter()
            .fold(MemoryFileSystem::new(), |fs, (path, content)| fs.with_file(*path, *content));
        TemplateEngine::new(SearchPath::from_config(&config), fs)
    }

    fn greeting_template() -> Template {
        let path = format!("{BUNDLED}/public/greeting.html");
        engine_with(&[(path.as_str(), "Hello, [[name]]! [[greeting]]")]).template(PUBLIC, "greeting")
    }

    #[test]
    fn loaded_template_is_normalized() {
        let path = format!("{BUNDLED}/public/footnote.html");
        let template = engine_with(&[(path.as_str(), "<span\n\tclass=\"x\" >[[text]]</span>\n")])
            .template(PUBLIC, "footnote");

        assert!(template.is_loaded());
        assert_eq!(template.source(), Some(Path::new(&path)));
        assert_eq!(template.original_content(), "<span class=\"x\">[[text]]</span>");
        assert_eq!(template.content(), template.original_content());
    }

    #[test]
    fn substitution_is_sequential() {
        let mut template = greeting_template();
        let placeholders = Placeholders::new()
            .with("name", "World")
            .with("greeting", "[[name]] says hi");

        assert!(template.replace(&placeholders));
        assert_eq!(template.content(), "Hello, World! [[name]] says hi");
    }

    #[test]
    fn later_entries_see_earlier_insertions() {
        let mut template = greeting_template();
        let placeholders = Placeholders::new()
            .with("greeting", "[[name]] says hi")
            .with("name", "World");

        assert!(template.replace(&placeholders));
        assert_eq!(template.content(), "Hello, World! World says hi");
    }

    #[test]
    fn every_occurrence_is_replaced() {
        let path = format!("{BUNDLED}/public/twice.html");
        let mut template = engine_with(&[(path.as_str(), "[[a]]-[[a]]-[[b]]")]).template(PUBLIC, "twice");
        assert!(template.replace(&Placeholders::new().with("a", "x")));
        assert_eq!(template.content(), "x-x-[[b]]");
    }

    #[test]
    fn unknown_placeholder_keys_leave_content_alone() {
        let mut template = greeting_template();
        assert!(template.replace(&Placeholders::new().with("missing", "x")));
        assert_eq!(template.content(), template.original_content());
    }

    #[test]
    fn reload_discards_substitutions() {
        let mut template = greeting_template();
        template.replace(&Placeholders::new().with("name", "A"));
        template.replace(&Placeholders::new().with("greeting", "B"));
        assert_eq!(template.content(), "Hello, A! B");

        template.reload();
        assert_eq!(template.content(), template.original_content());
        assert_eq!(template.content(), "Hello, [[name]]! [[greeting]]");
    }

    #[test]
    fn empty_mapping_is_rejected() {
        let mut template = greeting_template();
        assert!(!template.replace(&Placeholders::new()));
        assert_eq!(template.content(), template.original_content());
    }

    #[test]
    fn empty_file_name_yields_null_template() {
        let path = format!("{BUNDLED}/public/.html");
        let mut template = engine_with(&[(path.as_str(), "should not load")]).template(PUBLIC, "");

        assert!(!template.is_loaded());
        assert_eq!(template.content(), "");
        assert!(!template.replace(&Placeholders::new().with("a", "b")));
        assert_eq!(template.content(), "");
    }

    #[test]
    fn missing_template_yields_null_template() {
        let mut template = engine_with(&[]).template(PUBLIC, "nowhere");
        assert!(!template.is_loaded());
        assert_eq!(template.source(), None);
        assert!(!template.replace(&Placeholders::new().with("a", "b")));
    }

    #[test]
    fn empty_file_loads_but_cannot_be_replaced() {
        let path = format!("{BUNDLED}/public/blank.html");
        let mut template = engine_with(&[(path.as_str(), "\n\n")]).template(PUBLIC, "blank");
        assert!(template.is_loaded());
        assert!(!template.replace(&Placeholders::new().with("a", "b")));
    }

    #[test]
    fn theme_override_wins_over_bundled() {
        let engine = engine_with(&[
            ("/plugin/templates/public/footnote.html", "bundled"),
            ("/theme/footnotes/templates/public/footnote.html", "theme"),
        ]);
        let template = engine.template(PUBLIC, "footnote");
        assert_eq!(template.content(), "theme");
    }

    #[test]
    fn extension_selects_a_different_file() {
        let engine = engine_with(&[
            ("/plugin/templates/public/footnote.html", "html"),
            ("/plugin/templates/public/footnote.txt", "text"),
        ]);
        assert_eq!(engine.template_with_extension(PUBLIC, "footnote", "txt").content(), "text");
        assert_eq!(engine.locate(&TemplateDescriptor::new(PUBLIC, "")), None);
    }

    struct UnreadableFs;

    impl FileSystem for UnreadableFs {
        fn exists(&self, _path: &Path) -> bool {
            true
        }

        fn read(&self, _path: &Path) -> io::Result<Vec<u8>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[test]
    fn read_failure_is_treated_as_absent() {
        let engine = TemplateEngine::new(SearchPath::from_config(&TemplateConfig::default()), UnreadableFs);
        let template = engine.template(PUBLIC, "footnote");
        assert!(engine.locate(template.descriptor()).is_some());
        assert!(!template.is_loaded());
        assert_eq!(template.content(), "");
    }

    #[test]
    fn reads_from_disk_with_bom() {
        let tmp = TempDir::new().expect("tmp");
        let dir = tmp.path().join("templates").join("public");
        stdfs::create_dir_all(&dir).expect("mkdir");
        let mut bytes = vec![0xef, 0xbb, 0xbf];
        bytes.extend_from_slice(b"<b>[[x]]</b>\n");
        stdfs::write(dir.join("bold.html"), bytes).expect("write");

        let config = TemplateConfig {
            plugin_root: tmp.path().to_path_buf(),
            ..TemplateConfig::default()
        };
        let mut template = TemplateEngine::from_config(&config).template(PUBLIC, "bold");
        assert!(template.replace(&Placeholders::new().with("x", "1")));
        assert_eq!(template.content(), "<b>1</b>");
    }
}
