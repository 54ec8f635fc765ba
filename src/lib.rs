//! footnotes-core: settings reconciliation and template rendering for the
//! footnotes plugin.
//!
//! Two independent engines:
//! - [`settings`] merges persisted option records with compiled-in defaults
//!   into one in-memory snapshot, backed by any [`store::OptionStore`]
//! - [`template`] locates templates through an ordered search path,
//!   normalizes them once and renders `[[key]]` placeholders

pub mod config;
pub mod domain;
pub mod settings;
pub mod store;
pub mod template;
pub mod utils;

pub use config::{load_config, EngineConfig, StoreConfig, TemplateConfig};
pub use domain::{Record, SettingValue};
pub use settings::{Settings, SettingsError, SettingsSchema};
pub use store::{MemoryStore, OptionStore, SqliteStore, StoreError};
pub use template::{Placeholders, Template, TemplateDescriptor, TemplateEngine};
