//! Format-preserving temporal value

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A timestamp that keeps its source text exactly as received
///
/// The feed is inconsistent about fractional seconds (`...00Z` vs
/// `...00.000Z`), and the persistence layer must round-trip whatever was
/// published. Equality (`PartialEq`) is therefore raw-text equality;
/// change detection uses [`FormatPreservedDate::same_instant`], which
/// parses and compares instants so a formatting-only difference never
/// counts as a change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatPreservedDate {
    value: String,
}

impl FormatPreservedDate {
    /// Wrap a source timestamp string
    ///
    /// Returns `None` for an empty or whitespace-only source: the feed
    /// publishes blanks where a date is simply absent.
    pub fn of(value: impl Into<String>) -> Option<FormatPreservedDate> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self { value })
        }
    }

    /// The source text, verbatim
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The parsed instant, when the source text is valid RFC 3339
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.value)
            .ok()
            .map(|parsed| parsed.with_timezone(&Utc))
    }

    /// Format-tolerant semantic comparison
    ///
    /// Two parseable values are the same when they denote the same
    /// instant; unparseable values fall back to raw-text comparison.
    pub fn same_instant(&self, other: &FormatPreservedDate) -> bool {
        match (self.instant(), other.instant()) {
            (Some(a), Some(b)) => a == b,
            _ => self.value == other.value,
        }
    }
}

impl std::fmt::Display for FormatPreservedDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_source_is_absent() {
        assert!(FormatPreservedDate::of("").is_none());
        assert!(FormatPreservedDate::of("  \t").is_none());
    }

    #[test]
    fn test_source_text_is_preserved_verbatim() {
        let date = FormatPreservedDate::of("2024-02-14T13:42:33.5Z").unwrap();
        assert_eq!(date.value(), "2024-02-14T13:42:33.5Z");
    }

    #[test]
    fn test_same_instant_tolerates_fractional_second_formatting() {
        let plain = FormatPreservedDate::of("2024-02-14T13:42:33Z").unwrap();
        let millis = FormatPreservedDate::of("2024-02-14T13:42:33.000Z").unwrap();
        let offset = FormatPreservedDate::of("2024-02-14T14:42:33+01:00").unwrap();
        assert_ne!(plain, millis);
        assert!(plain.same_instant(&millis));
        assert!(plain.same_instant(&offset));
    }

    #[test]
    fn test_same_instant_detects_different_instants() {
        let a = FormatPreservedDate::of("2024-02-14T13:42:33Z").unwrap();
        let b = FormatPreservedDate::of("2024-02-14T13:42:34Z").unwrap();
        assert!(!a.same_instant(&b));
    }

    #[test]
    fn test_unparseable_values_fall_back_to_text_comparison() {
        let a = FormatPreservedDate::of("not-a-date").unwrap();
        let b = FormatPreservedDate::of("not-a-date").unwrap();
        let c = FormatPreservedDate::of("also-not-a-date").unwrap();
        assert!(a.same_instant(&b));
        assert!(!a.same_instant(&c));
    }
}
