//! Filter set types
//!
//! A `FilterSet` is built once per query and never mutated afterwards;
//! changing a filter means building a new set, which yields a new identity.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// Recognized filter names
pub mod keys {
    /// Single brand or list of brands
    pub const BRAND: &str = "brand";
    /// List of brands
    pub const BRANDS: &str = "brands";
    /// Registration year
    pub const YEAR: &str = "year";
    /// Price range as "min-max"
    pub const PRICE: &str = "price";
    /// Sort order
    pub const SORT_BY: &str = "sortBy";
    /// Designer identifier
    pub const DESIGNER_ID: &str = "designerId";
    /// Free-text search query
    pub const QUERY: &str = "q";
    /// Opaque pagination token
    pub const CURSOR: &str = "cursor";
}

/// A single filter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// Explicitly unset
    Null,
    /// Boolean flag
    Bool(bool),
    /// Numeric value (kept exact, `0` is a real value)
    Number(Number),
    /// Free text
    Text(String),
    /// Sequence of strings (e.g., brands)
    List(Vec<String>),
}

impl FilterValue {
    /// Render as a query parameter value.
    ///
    /// Returns `None` for null and empty strings. Lists are comma-joined.
    pub fn to_param(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Bool(b) => Some(b.to_string()),
            Self::Number(n) => Some(n.to_string()),
            Self::Text(s) if s.is_empty() => None,
            Self::Text(s) => Some(s.clone()),
            Self::List(items) => {
                let joined = items.join(",");
                if joined.is_empty() {
                    None
                } else {
                    Some(joined)
                }
            }
        }
    }

    /// Borrow the text content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Check if this value would be omitted from a request
    pub fn is_empty(&self) -> bool {
        self.to_param().is_none()
    }

    /// Convert to a JSON value
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::Text(s) => Value::String(s.clone()),
            Self::List(items) => Value::Array(items.iter().cloned().map(Value::String).collect()),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::Null, Self::Number)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for FilterValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(str::to_string).collect())
    }
}

/// Caller-supplied mapping describing which items to fetch and in what order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet {
    entries: BTreeMap<String, FilterValue>,
}

impl FilterSet {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with `key` set to `value`
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Return a copy without `key`
    #[must_use]
    pub fn without(mut self, key: &str) -> Self {
        self.entries.remove(key);
        self
    }

    /// Parse a filter set from a JSON object
    pub fn from_json(value: &Value) -> crate::Result<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Get a filter value
    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.entries.get(key)
    }

    /// Check if a filter is present (even if empty)
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate entries in canonical (sorted) order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The free-text query, trimmed, if present and non-blank
    pub fn search_text(&self) -> Option<&str> {
        self.get(keys::QUERY)
            .and_then(FilterValue::as_text)
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }

    /// The cursor carried in the filter set, if any
    pub fn cursor(&self) -> Option<&str> {
        self.get(keys::CURSOR)
            .and_then(FilterValue::as_text)
            .filter(|c| !c.is_empty())
    }
}

impl<K: Into<String>, V: Into<FilterValue>> FromIterator<(K, V)> for FilterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
