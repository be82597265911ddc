//! Response models

use super::lenient;
use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};

/// One bike record as the backend sends it.
///
/// Every field is optional; unknown fields are preserved in `extra`. Fields
/// the backend sends under two names are kept apart, so a record carrying
/// both still decodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBike {
    /// Record identifier
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub id: Option<String>,

    /// Document identifier, used when `id` is missing
    #[serde(
        default,
        rename = "_id",
        deserialize_with = "lenient::string_or_number"
    )]
    pub document_id: Option<String>,

    /// Listing title
    #[serde(default)]
    pub title: Option<String>,

    /// Model name, used when `title` is missing
    #[serde(default)]
    pub name: Option<String>,

    /// Manufacturer
    #[serde(default)]
    pub brand: Option<String>,

    /// Model year
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub year: Option<String>,

    /// Registration year, used when `year` is missing
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub registration_year: Option<String>,

    /// Asking price
    #[serde(default, deserialize_with = "lenient::number_or_string")]
    pub price: Option<f64>,

    /// Primary image URL
    #[serde(default)]
    pub image: Option<String>,

    /// Gallery image URLs
    #[serde(default)]
    pub images: Option<Vec<String>>,

    /// Badge labels; numbers are stringified, nulls and other values dropped
    #[serde(default, deserialize_with = "lenient::optional_string_list")]
    pub badges: Option<Vec<String>>,

    /// Tuning stage label, shown as an extra badge
    #[serde(default)]
    pub tuning_stage: Option<String>,

    /// Specification entries, passed through untouched
    #[serde(default)]
    pub specs: Option<Vec<JsonValue>>,

    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Pagination descriptor of a page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    /// Cursor for the following page; absent on the last page
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// One server response: `{ data: [...], pagination: { nextCursor } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records in server order
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,

    /// Pagination descriptor
    #[serde(default)]
    pub pagination: Option<PaginationInfo>,
}

impl<T> Page<T> {
    /// Create a page
    pub fn new(data: Vec<T>, next_cursor: Option<&str>) -> Self {
        Self {
            data,
            pagination: Some(PaginationInfo {
                next_cursor: next_cursor.map(str::to_string),
            }),
        }
    }

    /// Cursor for the next page; an empty cursor counts as absent
    pub fn next_cursor(&self) -> Option<&str> {
        self.pagination
            .as_ref()
            .and_then(|p| p.next_cursor.as_deref())
            .filter(|c| !c.is_empty())
    }

    /// Check if this is the terminal page
    pub fn is_last(&self) -> bool {
        self.next_cursor().is_none()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the page has no records
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// `{ data: T }` wrapper used by non-list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Price bounds offered by the filter endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceBounds {
    #[serde(default, deserialize_with = "lenient::number_or_string")]
    pub min: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number_or_string")]
    pub max: Option<f64>,
}

/// A sort choice, either a bare value or a labelled one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SortOption {
    Plain(String),
    Labeled { value: String, label: String },
}

impl SortOption {
    /// Value sent as `sortBy`
    pub fn value(&self) -> &str {
        match self {
            Self::Plain(value) | Self::Labeled { value, .. } => value,
        }
    }

    /// Human label, falling back to the value
    pub fn label(&self) -> &str {
        match self {
            Self::Plain(value) => value,
            Self::Labeled { label, .. } => label,
        }
    }
}

/// Available filter choices from `GET /bikes/filters`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOptions {
    #[serde(deserialize_with = "lenient::string_list")]
    pub brands: Vec<String>,

    #[serde(deserialize_with = "lenient::string_list")]
    pub years: Vec<String>,

    pub price_range: Option<PriceBounds>,

    pub sort_options: Vec<SortOption>,
}
