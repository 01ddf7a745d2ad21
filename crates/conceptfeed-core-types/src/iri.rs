//! Resource identifier newtype
//!
//! Every entity in the catalogue is identified by a globally unique IRI.
//! The core never parses IRIs beyond extracting the trailing path segment,
//! which the feed uses as the entity's short identifier.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Globally unique resource identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Iri(String);

impl Iri {
    /// Create an Iri from an existing identifier string
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Mint a fresh Iri under the given namespace using a random UUID
    ///
    /// Used by fixtures and by callers that create new resources; the
    /// core itself only ever receives identifiers from the feed.
    pub fn mint(namespace: &str) -> Self {
        Self(format!("{}/{}", namespace.trim_end_matches('/'), Uuid::new_v4()))
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The trailing path segment, if the IRI has one
    ///
    /// The feed derives an entity's short identifier from this segment.
    pub fn local_name(&self) -> Option<&str> {
        self.0
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
    }
}

impl std::fmt::Display for Iri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Iri {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_name_is_trailing_segment() {
        let iri = Iri::new("https://example.com/id/concept-snapshot/abc-123");
        assert_eq!(iri.local_name(), Some("abc-123"));
    }

    #[test]
    fn test_local_name_of_trailing_slash_is_none() {
        let iri = Iri::new("https://example.com/id/concept-snapshot/");
        assert_eq!(iri.local_name(), None);
    }

    #[test]
    fn test_mint_is_unique_under_namespace() {
        let a = Iri::mint("https://example.com/id/requirement");
        let b = Iri::mint("https://example.com/id/requirement");
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("https://example.com/id/requirement/"));
    }

    #[test]
    fn test_serde_round_trip() {
        let iri = Iri::new("https://example.com/id/x/1");
        let json = serde_json::to_string(&iri).unwrap();
        let back: Iri = serde_json::from_str(&json).unwrap();
        assert_eq!(iri, back);
    }
}
