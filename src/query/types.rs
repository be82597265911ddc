//! Query types

use crate::pagination::{FetchFailure, PageState};
use crate::transform::DisplayItem;
use serde::Serialize;

/// Options for a list query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Allow fetching pages after the first
    pub infinite: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self { infinite: true }
    }
}

impl QueryOptions {
    /// Single-page browsing: the first page only
    pub fn single_page() -> Self {
        Self { infinite: false }
    }
}

/// Result of a fetch call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A page was appended
    Appended {
        /// Records on the page
        records: usize,
        /// Whether another page can be requested
        has_more: bool,
    },
    /// Nothing to fetch in the current state (loaded, in flight, or exhausted)
    Skipped,
    /// The response arrived for a filter set that has since been replaced
    Discarded,
}

/// Serializable view of a query's state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuerySnapshot {
    /// Query key of the current filter set
    pub key: String,
    /// Fetch state
    pub state: PageState,
    /// Pages loaded so far
    pub pages: usize,
    /// Display items across all loaded pages, in fetch order
    pub items: Vec<DisplayItem>,
    /// Whether another page can be requested
    pub has_more: bool,
    /// First page in flight
    pub is_loading: bool,
    /// Later page in flight
    pub is_fetching_next: bool,
    /// Failure of the last fetch
    pub error: Option<FetchFailure>,
}
