//! Ordered placeholder mappings

use indexmap::IndexMap;

/// Placeholder values, applied in insertion order.
///
/// Duplicate keys are kept; each occurrence is a separate substitution step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    entries: Vec<(String, String)>,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Placeholders {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl From<IndexMap<String, String>> for Placeholders {
    fn from(map: IndexMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let placeholders = Placeholders::new().with("b", "2").with("a", "1");
        let keys: Vec<_> = placeholders.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn from_index_map_preserves_order() {
        let mut map = IndexMap::new();
        map.insert("z".to_string(), "last".to_string());
        map.insert("a".to_string(), "first".to_string());
        let placeholders = Placeholders::from(map);
        assert_eq!(placeholders.iter().collect::<Vec<_>>(), vec![("z", "last"), ("a", "first")]);
    }

    #[test]
    fn collects_from_pairs() {
        let placeholders: Placeholders = [("k", "v")].into_iter().collect();
        assert_eq!(placeholders.len(), 1);
        assert!(!placeholders.is_empty());
        assert!(Placeholders::new().is_empty());
    }
}
