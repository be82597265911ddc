//! Canonical query identity

use super::types::{keys, FilterSet};
use serde_json::{Map, Value};
use std::fmt;

/// Scope prefix for catalog list keys
pub const KEY_SCOPE: &str = "bikes";

/// Canonical identity of a filter set.
///
/// Two filter sets with the same entries produce the same key whatever order
/// they were built in. The cursor is a page parameter and does not take part
/// in the identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(String);

impl QueryKey {
    /// Build the key for a filter set
    pub fn of(filters: &FilterSet) -> Self {
        let mut canonical = Map::new();
        for (name, value) in filters.iter() {
            if name == keys::CURSOR {
                continue;
            }
            canonical.insert(name.to_string(), value.to_json());
        }
        Self(format!("{KEY_SCOPE}:{}", Value::Object(canonical)))
    }

    /// Borrow the key as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&FilterSet> for QueryKey {
    fn from(filters: &FilterSet) -> Self {
        Self::of(filters)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
