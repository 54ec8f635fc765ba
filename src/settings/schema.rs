//! Default schemas for settings containers.
//!
//! A schema is the ordered list of containers together with each container's
//! default record. Construction validates that container names and setting
//! keys are unique across the whole schema.

use crate::domain::{Record, SettingValue};
use crate::settings::keys::*;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("container '{0}' is registered twice")]
    DuplicateContainer(String),

    #[error("setting '{key}' is defined in both '{first}' and '{second}'")]
    DuplicateKey { key: String, first: String, second: String },
}

/// One container and its default record.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerSchema {
    name: String,
    defaults: Record,
}

impl ContainerSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), defaults: Record::new() }
    }

    /// Append a default. Re-adding a key replaces its value in place.
    pub fn with(mut self, key: &str, value: impl Into<SettingValue>) -> Self {
        self.defaults.insert(key.to_string(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn defaults(&self) -> &Record {
        &self.defaults
    }
}

/// Ordered, validated set of containers.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsSchema {
    containers: Vec<ContainerSchema>,
}

impl SettingsSchema {
    pub fn new(containers: Vec<ContainerSchema>) -> Result<Self, SchemaError> {
        let mut owners: HashMap<&str, &str> = HashMap::new();
        for (index, container) in containers.iter().enumerate() {
            if containers[..index].iter().any(|c| c.name == container.name) {
                return Err(SchemaError::DuplicateContainer(container.name.clone()));
            }
            for key in container.defaults.keys() {
                if let Some(first) = owners.insert(key.as_str(), container.name.as_str()) {
                    return Err(SchemaError::DuplicateKey {
                        key: key.clone(),
                        first: first.to_string(),
                        second: container.name.clone(),
                    });
                }
            }
        }
        Ok(Self { containers })
    }

    /// The plugin's four containers with their shipped defaults.
    pub fn builtin() -> Self {
        Self { containers: vec![general(), custom(), expert(), custom_css()] }
    }

    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    pub fn container(&self, index: usize) -> Option<&ContainerSchema> {
        self.containers.get(index)
    }

    pub fn containers(&self) -> &[ContainerSchema] {
        &self.containers
    }

    pub fn container_index(&self, name: &str) -> Option<usize> {
        self.containers.iter().position(|c| c.name == name)
    }

    /// Name of the container whose schema defines `key`.
    pub fn container_of(&self, key: &str) -> Option<&str> {
        self.containers.iter().find(|c| c.defaults.contains_key(key)).map(|c| c.name())
    }

    /// Union of every container's defaults, in registration order.
    pub fn all_defaults(&self) -> Record {
        let mut all = Record::new();
        for container in &self.containers {
            all.extend(container.defaults.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        all
    }
}

fn general() -> ContainerSchema {
    ContainerSchema::new(GENERAL_CONTAINER)
        .with(AMP_COMPATIBILITY_ENABLE, "")
        // shortcode delimiters
        .with(SHORT_CODE_START, "((")
        .with(SHORT_CODE_END, "))")
        .with(SHORT_CODE_START_USER_DEFINED, "")
        .with(SHORT_CODE_END_USER_DEFINED, "")
        .with(SHORTCODE_SYNTAX_VALIDATION_ENABLE, "yes")
        // numbering
        .with(COUNTER_STYLE, "arabic_plain")
        .with(COMBINE_IDENTICAL_FOOTNOTES, "yes")
        // scrolling and fragment ids
        .with(SCROLL_OFFSET, 20)
        .with(SCROLL_DURATION, 380)
        .with(SCROLL_DURATION_ASYMMETRICITY, "no")
        .with(SCROLL_DOWN_DURATION, 150)
        .with(SCROLL_DOWN_DELAY, 0)
        .with(SCROLL_UP_DELAY, 0)
        .with(HARD_LINKS_ENABLE, "no")
        .with(REFERRER_FRAGMENT_ID_SLUG, "r")
        .with(FOOTNOTE_FRAGMENT_ID_SLUG, "f")
        .with(HARD_LINK_IDS_SEPARATOR, "+")
        .with(BACKLINK_TOOLTIP_ENABLE, "yes")
        .with(BACKLINK_TOOLTIP_TEXT, "Alt+ ←")
        // reference container
        .with(REFERENCE_CONTAINER_NAME, "References")
        .with(REFERENCE_CONTAINER_LABEL_ELEMENT, "p")
        .with(REFERENCE_CONTAINER_LABEL_BOTTOM_BORDER, "yes")
        .with(REFERENCE_CONTAINER_COLLAPSE, "no")
        .with(REFERENCE_CONTAINER_SCRIPT_MODE, "jquery")
        .with(REFERENCE_CONTAINER_POSITION, "post_end")
        .with(REFERENCE_CONTAINER_POSITION_SHORTCODE, "[[references]]")
        .with(REFERENCE_CONTAINER_START_PAGE_ENABLE, "yes")
        .with(REFERENCE_CONTAINER_TOP_MARGIN, 24)
        .with(REFERENCE_CONTAINER_BOTTOM_MARGIN, 0)
        .with(PAGE_LAYOUT_SUPPORT, "none")
        .with(URL_WRAP_ENABLED, "yes")
        .with(REFERENCE_CONTAINER_BACKLINK_SYMBOL_ENABLE, "yes")
        .with(REFERENCE_CONTAINER_BACKLINK_SYMBOL_SWITCH, "no")
        .with(REFERENCE_CONTAINER_3COLUMN_LAYOUT_ENABLE, "no")
        .with(REFERENCE_CONTAINER_ROW_BORDERS_ENABLE, "no")
        .with(BACKLINKS_SEPARATOR_ENABLED, "yes")
        .with(BACKLINKS_SEPARATOR_OPTION, "comma")
        .with(BACKLINKS_SEPARATOR_CUSTOM, "")
        .with(BACKLINKS_TERMINATOR_ENABLED, "no")
        .with(BACKLINKS_TERMINATOR_OPTION, "full_stop")
        .with(BACKLINKS_TERMINATOR_CUSTOM, "")
        .with(BACKLINKS_COLUMN_WIDTH_ENABLED, "no")
        .with(BACKLINKS_COLUMN_WIDTH_SCALAR, "50")
        .with(BACKLINKS_COLUMN_WIDTH_UNIT, "px")
        .with(BACKLINKS_COLUMN_MAX_WIDTH_ENABLED, "no")
        .with(BACKLINKS_COLUMN_MAX_WIDTH_SCALAR, "140")
        .with(BACKLINKS_COLUMN_MAX_WIDTH_UNIT, "px")
        .with(BACKLINKS_LINE_BREAKS_ENABLED, "no")
        .with(LINK_ELEMENT_ENABLED, "yes")
        .with(IN_EXCERPT, "no")
        .with(LOVE, "no")
        // deprecated
        .with(EXPERT_MODE, "yes")
}

fn custom() -> ContainerSchema {
    ContainerSchema::new(CUSTOM_CONTAINER)
        .with(HYPERLINK_ARROW, "&#8593;")
        .with(HYPERLINK_ARROW_USER_DEFINED, "")
        // referrers
        .with(REFERRER_SUPERSCRIPT_TAGS, "yes")
        .with(REFERRERS_NORMAL_SUPERSCRIPT, "no")
        .with(STYLING_BEFORE, "[")
        .with(STYLING_AFTER, "]")
        // tooltips
        .with(TOOLTIP_ENABLED, "yes")
        .with(TOOLTIP_ALTERNATIVE, "no")
        .with(TOOLTIP_POSITION, "top center")
        .with(ALTERNATIVE_TOOLTIP_POSITION, "top right")
        .with(TOOLTIP_OFFSET_X, 0)
        .with(ALTERNATIVE_TOOLTIP_OFFSET_X, -50)
        .with(TOOLTIP_OFFSET_Y, -7)
        .with(ALTERNATIVE_TOOLTIP_OFFSET_Y, 24)
        .with(TOOLTIP_MAX_WIDTH, 450)
        .with(ALTERNATIVE_TOOLTIP_WIDTH, 400)
        // fade timing in milliseconds
        .with(TOOLTIP_FADE_IN_DELAY, 0)
        .with(TOOLTIP_FADE_IN_DURATION, 200)
        .with(TOOLTIP_FADE_OUT_DELAY, 400)
        .with(TOOLTIP_FADE_OUT_DURATION, 200)
        .with(TOOLTIP_EXCERPT_ENABLED, "yes")
        .with(TOOLTIP_EXCERPT_LENGTH, 200)
        .with(TOOLTIP_READON_LABEL, "Continue reading")
        .with(TOOLTIP_EXCERPT_DELIMITER, "[[/tooltip]]")
        .with(TOOLTIP_EXCERPT_MIRROR_ENABLE, "no")
        .with(TOOLTIP_EXCERPT_MIRROR_SEPARATOR, " — ")
        .with(TOOLTIP_FONT_SIZE_ENABLED, "yes")
        .with(TOOLTIP_FONT_SIZE_SCALAR, 13.0)
        .with(TOOLTIP_FONT_SIZE_UNIT, "px")
        .with(TOOLTIP_COLOR, "")
        .with(TOOLTIP_BACKGROUND, "")
        .with(TOOLTIP_BORDER_WIDTH, 1)
        .with(TOOLTIP_BORDER_COLOR, "#cccc99")
        .with(TOOLTIP_BORDER_RADIUS, 0)
        .with(TOOLTIP_SHADOW_COLOR, "#666666")
        .with(CUSTOM_CSS_LEGACY, "")
}

fn expert() -> ContainerSchema {
    ContainerSchema::new(EXPERT_CONTAINER)
        .with(HOOK_THE_TITLE, "")
        .with(HOOK_THE_TITLE_PRIORITY_LEVEL, PRIORITY_LEVEL_UNSET)
        .with(HOOK_THE_CONTENT, "checked")
        .with(HOOK_THE_CONTENT_PRIORITY_LEVEL, 98)
        .with(HOOK_THE_EXCERPT, "")
        .with(HOOK_THE_EXCERPT_PRIORITY_LEVEL, PRIORITY_LEVEL_UNSET)
        .with(HOOK_WIDGET_TITLE, "")
        .with(HOOK_WIDGET_TITLE_PRIORITY_LEVEL, PRIORITY_LEVEL_UNSET)
        .with(HOOK_WIDGET_TEXT, "")
        .with(HOOK_WIDGET_TEXT_PRIORITY_LEVEL, 98)
}

fn custom_css() -> ContainerSchema {
    ContainerSchema::new(CUSTOM_CSS_CONTAINER)
        .with(CUSTOM_CSS_LEGACY_ENABLE, "yes")
        .with(CUSTOM_CSS_NEW, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_schema_passes_validation() {
        let builtin = SettingsSchema::builtin();
        let validated = SettingsSchema::new(builtin.containers().to_vec()).expect("valid");
        assert_eq!(validated.container_count(), 4);
        assert_eq!(builtin.all_defaults().len(), 101);
    }

    #[test]
    fn builtin_containers_keep_registration_order() {
        let schema = SettingsSchema::builtin();
        let names: Vec<&str> = schema.containers().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec![GENERAL_CONTAINER, CUSTOM_CONTAINER, EXPERT_CONTAINER, CUSTOM_CSS_CONTAINER]);
        assert_eq!(schema.container_index(EXPERT_CONTAINER), Some(2));
        assert_eq!(schema.container_index("nope"), None);
    }

    #[test]
    fn builtin_defaults_carry_scalar_kinds() {
        let schema = SettingsSchema::builtin();
        let all = schema.all_defaults();
        assert_eq!(all[SCROLL_DURATION], SettingValue::Integer(380));
        assert_eq!(all[TOOLTIP_FONT_SIZE_SCALAR], SettingValue::Float(13.0));
        assert_eq!(all[BACKLINKS_COLUMN_WIDTH_SCALAR], SettingValue::text("50"));
        assert_eq!(all[HOOK_THE_TITLE_PRIORITY_LEVEL], SettingValue::Integer(PRIORITY_LEVEL_UNSET));
        assert_eq!(all[REFERENCE_CONTAINER_POSITION_SHORTCODE], SettingValue::text("[[references]]"));
    }

    #[test]
    fn container_of_finds_owner() {
        let schema = SettingsSchema::builtin();
        assert_eq!(schema.container_of(CUSTOM_CSS_NEW), Some(CUSTOM_CSS_CONTAINER));
        assert_eq!(schema.container_of(HOOK_THE_CONTENT), Some(EXPERT_CONTAINER));
        assert_eq!(schema.container_of("unknown"), None);
    }

    #[test]
    fn duplicate_key_across_containers_is_rejected() {
        let err = SettingsSchema::new(vec![
            ContainerSchema::new("a").with("shared", "x"),
            ContainerSchema::new("b").with("other", 1).with("shared", "y"),
        ])
        .expect_err("duplicate key");
        assert_eq!(
            err,
            SchemaError::DuplicateKey {
                key: "shared".to_string(),
                first: "a".to_string(),
                second: "b".to_string(),
            }
        );
    }

    #[test]
    fn duplicate_container_is_rejected() {
        let err = SettingsSchema::new(vec![ContainerSchema::new("a"), ContainerSchema::new("a")])
            .expect_err("duplicate container");
        assert_eq!(err, SchemaError::DuplicateContainer("a".to_string()));
    }
}
