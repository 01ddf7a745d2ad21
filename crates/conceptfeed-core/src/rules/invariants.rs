//! Reusable invariant assertions
//!
//! Every builder in the model runs its invariant set through these
//! functions, so violation messages are uniform across the aggregate.
//! Each function takes the qualified field name under which a violation
//! should be reported (e.g. `"title"`, `"costs > order"`).

use std::collections::HashSet;
use std::hash::Hash;

use crate::errors::{InvariantError, Result};

/// Unwrap a required value, or fail with the qualified field name
pub fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| InvariantError::MissingValue {
        field: field.to_string(),
    })
}

/// Reject a present-but-whitespace-only string
///
/// Absence is not a violation here; combine with [`required`] when the
/// value is also mandatory.
pub fn not_blank(value: Option<&str>, field: &str) -> Result<()> {
    match value {
        Some(text) if text.trim().is_empty() => Err(InvariantError::Blank {
            field: field.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Reject a collection with two elements equal under `PartialEq`
///
/// The collection's defined equality is whatever `PartialEq` means for
/// the element type: identifier equality for resource references, enum
/// equality for codelist members, full slot-wise equality for
/// multi-locale strings.
pub fn no_duplicates<T: PartialEq>(items: &[T], field: &str) -> Result<()> {
    for (index, item) in items.iter().enumerate() {
        if items[..index].contains(item) {
            return Err(InvariantError::DuplicateValue {
                field: field.to_string(),
            });
        }
    }
    Ok(())
}

/// Reject a collection in which two elements share a key
///
/// Used for the 1-based `order` field of ordered child collections; the
/// field name identifies which collection, e.g. `"costs > order"`.
pub fn unique_by<T, K, F>(items: &[T], key_fn: F, field: &str) -> Result<()>
where
    K: Eq + Hash + std::fmt::Display,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    for item in items {
        let key = key_fn(item);
        if seen.contains(&key) {
            return Err(InvariantError::DuplicateKey {
                field: field.to_string(),
                key: key.to_string(),
            });
        }
        seen.insert(key);
    }
    Ok(())
}
