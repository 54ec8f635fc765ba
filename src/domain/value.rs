//! Scalar setting values and persisted records

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered mapping from setting key to value.
///
/// Used for default schemas, persisted container records and the merged
/// snapshot. Iteration order is insertion order.
pub type Record = IndexMap<String, SettingValue>;

/// A single setting value.
///
/// Settings are semantically typed per key but stored as plain scalars, so a
/// persisted record may carry an integer where the schema declares a string
/// and vice versa. Nothing here coerces between variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl SettingValue {
    pub fn text(value: impl Into<String>) -> Self {
        SettingValue::Text(value.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Integer view of the value. Numeric strings are accepted because the
    /// dashboard posts every field back as text.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SettingValue::Integer(i) => Some(*i),
            SettingValue::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            SettingValue::Float(_) => None,
            SettingValue::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SettingValue::Integer(i) => Some(*i as f64),
            SettingValue::Float(f) => Some(*f),
            SettingValue::Text(s) => s.trim().parse().ok(),
        }
    }

    /// True for empty strings, which the dashboard uses for "off" checkboxes.
    pub fn is_empty(&self) -> bool {
        matches!(self, SettingValue::Text(s) if s.is_empty())
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Integer(i) => write!(f, "{i}"),
            SettingValue::Float(v) => write!(f, "{v}"),
            SettingValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Text(value)
    }
}

impl From<i32> for SettingValue {
    fn from(value: i32) -> Self {
        SettingValue::Integer(value.into())
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Integer(value)
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        SettingValue::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_json_keeps_scalar_kinds() {
        let record: Record =
            serde_json::from_str(r#"{"a":"yes","b":20,"c":13.5,"d":""}"#).expect("json");
        assert_eq!(record["a"], SettingValue::text("yes"));
        assert_eq!(record["b"], SettingValue::Integer(20));
        assert_eq!(record["c"], SettingValue::Float(13.5));
        assert!(record["d"].is_empty());
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn numeric_views_accept_posted_strings() {
        assert_eq!(SettingValue::text(" 50 ").as_i64(), Some(50));
        assert_eq!(SettingValue::text("px").as_i64(), None);
        assert_eq!(SettingValue::Float(13.0).as_i64(), Some(13));
        assert_eq!(SettingValue::Integer(7).as_f64(), Some(7.0));
    }

    #[test]
    fn display_renders_raw_scalar() {
        assert_eq!(SettingValue::text("top center").to_string(), "top center");
        assert_eq!(SettingValue::Integer(-50).to_string(), "-50");
        assert_eq!(SettingValue::Float(13.5).to_string(), "13.5");
    }
}
