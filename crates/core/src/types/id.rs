//! Newtype ID for type-safe book references.
//!
//! The catalog source is loose about id types: some records carry
//! `"id": "abc123"`, others `"id": 7`. Both deserialize to the canonical
//! string form here, so nothing downstream ever branches on the wire shape.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identity of a book within a catalog snapshot.
///
/// Stored as a string regardless of whether the source emitted a JSON
/// string or number. Equality and hashing are on the canonical string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    /// Create a new ID from a string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BookId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<i64> for BookId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for BookId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Number(n) => Self(n.to_string()),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_string() {
        let id: BookId = serde_json::from_str("\"abc123\"").unwrap();
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn test_deserialize_from_number() {
        let id: BookId = serde_json::from_str("7").unwrap();
        assert_eq!(id, BookId::new("7"));
    }

    #[test]
    fn test_string_and_number_forms_are_equal() {
        let text: BookId = serde_json::from_str("\"7\"").unwrap();
        let number: BookId = serde_json::from_str("7").unwrap();
        assert_eq!(text, number);
    }

    #[test]
    fn test_serialize_as_string() {
        let id = BookId::from(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
    }

    #[test]
    fn test_display() {
        let id = BookId::new("dune-1");
        assert_eq!(format!("{id}"), "dune-1");
    }
}
