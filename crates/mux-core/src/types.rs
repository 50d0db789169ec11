//! Match result types shared by the trie and the router.

use serde::ser::{Serialize, SerializeMap, Serializer};

// =============================================================================
// Params
// =============================================================================

/// Parameter values captured while matching, in path order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a captured value by parameter name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate `(name, value)` pairs in the order they appear in the path.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn push(&mut self, name: &str, value: impl Into<String>) {
        self.entries.push((name.to_string(), value.into()));
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.entries.truncate(len);
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// =============================================================================
// Match
// =============================================================================

/// A successful lookup: the captured params and the registered handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'a, H> {
    pub params: Params,
    pub handler: &'a H,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_lookup() {
        let mut params = Params::new();
        assert!(params.is_empty());

        params.push("id", "42");
        params.push("rest", "a/b");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("rest"), Some("a/b"));
        assert_eq!(params.get("missing"), None);

        params.truncate(1);
        assert_eq!(params.iter().collect::<Vec<_>>(), vec![("id", "42")]);
    }

    #[test]
    fn test_params_serialize_as_object() {
        let mut params = Params::new();
        params.push("user", "ada");
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"user":"ada"}"#);
    }
}
