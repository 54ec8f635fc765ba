//! Setting keys and container names of the built-in schema.
//!
//! Keys are the persisted identifiers and must stay stable: renaming one
//! orphans whatever users saved under the old name.

/// General settings: shortcodes, numbering, scrolling, reference container.
pub const GENERAL_CONTAINER: &str = "footnotes_storage";
/// Referrer typesetting and tooltip styling.
pub const CUSTOM_CONTAINER: &str = "footnotes_storage_custom";
/// Hook scope and priority levels.
pub const EXPERT_CONTAINER: &str = "footnotes_storage_expert";
/// Custom CSS.
pub const CUSTOM_CSS_CONTAINER: &str = "footnotes_storage_custom_css";

/// Priority level stored for hooks that have never been given one.
pub const PRIORITY_LEVEL_UNSET: i64 = i64::MAX;

// General
pub const AMP_COMPATIBILITY_ENABLE: &str = "footnotes_inputfield_amp_compatibility_enable";
pub const SHORT_CODE_START: &str = "footnote_inputfield_placeholder_start";
pub const SHORT_CODE_END: &str = "footnote_inputfield_placeholder_end";
pub const SHORT_CODE_START_USER_DEFINED: &str = "footnote_inputfield_placeholder_start_user_defined";
pub const SHORT_CODE_END_USER_DEFINED: &str = "footnote_inputfield_placeholder_end_user_defined";
pub const SHORTCODE_SYNTAX_VALIDATION_ENABLE: &str = "footnotes_inputfield_shortcode_syntax_validation_enable";
pub const COUNTER_STYLE: &str = "footnote_inputfield_counter_style";
pub const COMBINE_IDENTICAL_FOOTNOTES: &str = "footnote_inputfield_combine_identical";
pub const SCROLL_OFFSET: &str = "footnotes_inputfield_scroll_offset";
pub const SCROLL_DURATION: &str = "footnotes_inputfield_scroll_duration";
pub const SCROLL_DURATION_ASYMMETRICITY: &str = "footnotes_inputfield_scroll_duration_asymmetricity";
pub const SCROLL_DOWN_DURATION: &str = "footnotes_inputfield_scroll_down_duration";
pub const SCROLL_DOWN_DELAY: &str = "footnotes_inputfield_scroll_down_delay";
pub const SCROLL_UP_DELAY: &str = "footnotes_inputfield_scroll_up_delay";
pub const HARD_LINKS_ENABLE: &str = "footnotes_inputfield_hard_links_enable";
pub const REFERRER_FRAGMENT_ID_SLUG: &str = "footnotes_inputfield_referrer_fragment_id_slug";
pub const FOOTNOTE_FRAGMENT_ID_SLUG: &str = "footnotes_inputfield_footnote_fragment_id_slug";
pub const HARD_LINK_IDS_SEPARATOR: &str = "footnotes_inputfield_hard_link_ids_separator";
pub const BACKLINK_TOOLTIP_ENABLE: &str = "footnotes_inputfield_backlink_tooltip_enable";
pub const BACKLINK_TOOLTIP_TEXT: &str = "footnotes_inputfield_backlink_tooltip_text";
pub const REFERENCE_CONTAINER_NAME: &str = "footnote_inputfield_references_label";
pub const REFERENCE_CONTAINER_LABEL_ELEMENT: &str = "footnotes_inputfield_reference_container_label_element";
pub const REFERENCE_CONTAINER_LABEL_BOTTOM_BORDER: &str = "footnotes_inputfield_reference_container_label_bottom_border";
pub const REFERENCE_CONTAINER_COLLAPSE: &str = "footnote_inputfield_collapse_references";
pub const REFERENCE_CONTAINER_SCRIPT_MODE: &str = "footnotes_inputfield_reference_container_script_mode";
pub const REFERENCE_CONTAINER_POSITION: &str = "footnote_inputfield_reference_container_place";
pub const REFERENCE_CONTAINER_POSITION_SHORTCODE: &str = "footnote_inputfield_reference_container_position_shortcode";
pub const REFERENCE_CONTAINER_START_PAGE_ENABLE: &str = "footnotes_inputfield_reference_container_start_page_enable";
pub const REFERENCE_CONTAINER_TOP_MARGIN: &str = "footnotes_inputfield_reference_container_top_margin";
pub const REFERENCE_CONTAINER_BOTTOM_MARGIN: &str = "footnotes_inputfield_reference_container_bottom_margin";
pub const PAGE_LAYOUT_SUPPORT: &str = "footnotes_inputfield_page_layout_support";
pub const URL_WRAP_ENABLED: &str = "footnote_inputfield_url_wrap_enabled";
pub const REFERENCE_CONTAINER_BACKLINK_SYMBOL_ENABLE: &str = "footnotes_inputfield_reference_container_backlink_symbol_enable";
pub const REFERENCE_CONTAINER_BACKLINK_SYMBOL_SWITCH: &str = "footnotes_inputfield_reference_container_backlink_symbol_switch";
pub const REFERENCE_CONTAINER_3COLUMN_LAYOUT_ENABLE: &str = "footnotes_inputfield_reference_container_3column_layout_enable";
pub const REFERENCE_CONTAINER_ROW_BORDERS_ENABLE: &str = "footnotes_inputfield_reference_container_row_borders_enable";
pub const BACKLINKS_SEPARATOR_ENABLED: &str = "footnotes_inputfield_backlinks_separator_enabled";
pub const BACKLINKS_SEPARATOR_OPTION: &str = "footnotes_inputfield_backlinks_separator_option";
pub const BACKLINKS_SEPARATOR_CUSTOM: &str = "footnotes_inputfield_backlinks_separator_custom";
pub const BACKLINKS_TERMINATOR_ENABLED: &str = "footnotes_inputfield_backlinks_terminator_enabled";
pub const BACKLINKS_TERMINATOR_OPTION: &str = "footnotes_inputfield_backlinks_terminator_option";
pub const BACKLINKS_TERMINATOR_CUSTOM: &str = "footnotes_inputfield_backlinks_terminator_custom";
pub const BACKLINKS_COLUMN_WIDTH_ENABLED: &str = "footnotes_inputfield_backlinks_column_width_enabled";
pub const BACKLINKS_COLUMN_WIDTH_SCALAR: &str = "footnotes_inputfield_backlinks_column_width_scalar";
pub const BACKLINKS_COLUMN_WIDTH_UNIT: &str = "footnotes_inputfield_backlinks_column_width_unit";
pub const BACKLINKS_COLUMN_MAX_WIDTH_ENABLED: &str = "footnotes_inputfield_backlinks_column_max_width_enabled";
pub const BACKLINKS_COLUMN_MAX_WIDTH_SCALAR: &str = "footnotes_inputfield_backlinks_column_max_width_scalar";
pub const BACKLINKS_COLUMN_MAX_WIDTH_UNIT: &str = "footnotes_inputfield_backlinks_column_max_width_unit";
pub const BACKLINKS_LINE_BREAKS_ENABLED: &str = "footnotes_inputfield_backlinks_line_breaks_enabled";
pub const LINK_ELEMENT_ENABLED: &str = "footnote_inputfield_link_element_enabled";
pub const IN_EXCERPT: &str = "footnote_inputfield_search_in_excerpt";
pub const LOVE: &str = "footnote_inputfield_love";
pub const EXPERT_MODE: &str = "footnote_inputfield_enable_expert_mode";

// Referrers and tooltips
pub const HYPERLINK_ARROW: &str = "footnote_inputfield_custom_hyperlink_symbol";
pub const HYPERLINK_ARROW_USER_DEFINED: &str = "footnote_inputfield_custom_hyperlink_symbol_user";
pub const REFERRER_SUPERSCRIPT_TAGS: &str = "footnotes_inputfield_referrer_superscript_tags";
pub const REFERRERS_NORMAL_SUPERSCRIPT: &str = "footnotes_inputfield_referrers_normal_superscript";
pub const STYLING_BEFORE: &str = "footnote_inputfield_custom_styling_before";
pub const STYLING_AFTER: &str = "footnote_inputfield_custom_styling_after";
pub const TOOLTIP_ENABLED: &str = "footnote_inputfield_custom_mouse_over_box_enabled";
pub const TOOLTIP_ALTERNATIVE: &str = "footnote_inputfield_custom_mouse_over_box_alternative";
pub const TOOLTIP_POSITION: &str = "footnote_inputfield_custom_mouse_over_box_position";
pub const ALTERNATIVE_TOOLTIP_POSITION: &str = "footnotes_inputfield_alternative_mouse_over_box_position";
pub const TOOLTIP_OFFSET_X: &str = "footnote_inputfield_custom_mouse_over_box_offset_x";
pub const ALTERNATIVE_TOOLTIP_OFFSET_X: &str = "footnotes_inputfield_alternative_mouse_over_box_offset_x";
pub const TOOLTIP_OFFSET_Y: &str = "footnote_inputfield_custom_mouse_over_box_offset_y";
pub const ALTERNATIVE_TOOLTIP_OFFSET_Y: &str = "footnotes_inputfield_alternative_mouse_over_box_offset_y";
pub const TOOLTIP_MAX_WIDTH: &str = "footnote_inputfield_custom_mouse_over_box_max_width";
pub const ALTERNATIVE_TOOLTIP_WIDTH: &str = "footnotes_inputfield_alternative_mouse_over_box_width";
pub const TOOLTIP_FADE_IN_DELAY: &str = "footnotes_inputfield_mouse_over_box_fade_in_delay";
pub const TOOLTIP_FADE_IN_DURATION: &str = "footnotes_inputfield_mouse_over_box_fade_in_duration";
pub const TOOLTIP_FADE_OUT_DELAY: &str = "footnotes_inputfield_mouse_over_box_fade_out_delay";
pub const TOOLTIP_FADE_OUT_DURATION: &str = "footnotes_inputfield_mouse_over_box_fade_out_duration";
pub const TOOLTIP_EXCERPT_ENABLED: &str = "footnote_inputfield_custom_mouse_over_box_excerpt_enabled";
pub const TOOLTIP_EXCERPT_LENGTH: &str = "footnote_inputfield_custom_mouse_over_box_excerpt_length";
pub const TOOLTIP_READON_LABEL: &str = "footnote_inputfield_readon_label";
pub const TOOLTIP_EXCERPT_DELIMITER: &str = "footnotes_inputfield_tooltip_excerpt_delimiter";
pub const TOOLTIP_EXCERPT_MIRROR_ENABLE: &str = "footnotes_inputfield_tooltip_excerpt_mirror_enable";
pub const TOOLTIP_EXCERPT_MIRROR_SEPARATOR: &str = "footnotes_inputfield_tooltip_excerpt_mirror_separator";
pub const TOOLTIP_FONT_SIZE_ENABLED: &str = "footnotes_inputfield_mouse_over_box_font_size_enabled";
pub const TOOLTIP_FONT_SIZE_SCALAR: &str = "footnotes_inputfield_mouse_over_box_font_size_scalar";
pub const TOOLTIP_FONT_SIZE_UNIT: &str = "footnotes_inputfield_mouse_over_box_font_size_unit";
pub const TOOLTIP_COLOR: &str = "footnote_inputfield_custom_mouse_over_box_color";
pub const TOOLTIP_BACKGROUND: &str = "footnote_inputfield_custom_mouse_over_box_background";
pub const TOOLTIP_BORDER_WIDTH: &str = "footnote_inputfield_custom_mouse_over_box_border_width";
pub const TOOLTIP_BORDER_COLOR: &str = "footnote_inputfield_custom_mouse_over_box_border_color";
pub const TOOLTIP_BORDER_RADIUS: &str = "footnote_inputfield_custom_mouse_over_box_border_radius";
pub const TOOLTIP_SHADOW_COLOR: &str = "footnote_inputfield_custom_mouse_over_box_shadow_color";
pub const CUSTOM_CSS_LEGACY: &str = "footnote_inputfield_custom_css";

// Hook scope
pub const HOOK_THE_TITLE: &str = "footnote_inputfield_expert_lookup_the_title";
pub const HOOK_THE_TITLE_PRIORITY_LEVEL: &str = "footnote_inputfield_expert_lookup_the_title_priority_level";
pub const HOOK_THE_CONTENT: &str = "footnote_inputfield_expert_lookup_the_content";
pub const HOOK_THE_CONTENT_PRIORITY_LEVEL: &str = "footnote_inputfield_expert_lookup_the_content_priority_level";
pub const HOOK_THE_EXCERPT: &str = "footnote_inputfield_expert_lookup_the_excerpt";
pub const HOOK_THE_EXCERPT_PRIORITY_LEVEL: &str = "footnote_inputfield_expert_lookup_the_excerpt_priority_level";
pub const HOOK_WIDGET_TITLE: &str = "footnote_inputfield_expert_lookup_widget_title";
pub const HOOK_WIDGET_TITLE_PRIORITY_LEVEL: &str = "footnote_inputfield_expert_lookup_widget_title_priority_level";
pub const HOOK_WIDGET_TEXT: &str = "footnote_inputfield_expert_lookup_widget_text";
pub const HOOK_WIDGET_TEXT_PRIORITY_LEVEL: &str = "footnote_inputfield_expert_lookup_widget_text_priority_level";

// Custom CSS
pub const CUSTOM_CSS_LEGACY_ENABLE: &str = "footnote_inputfield_custom_css_legacy_enable";
pub const CUSTOM_CSS_NEW: &str = "footnote_inputfield_custom_css_new";
