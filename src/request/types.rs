//! Request types

use crate::filter::FilterSet;
use crate::types::QueryParams;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend endpoints consumed by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// Filtered listing: `GET /bikes`
    Browse,
    /// Free-text search: `GET /bikes/search`
    Search,
    /// Available filter options: `GET /bikes/filters`
    FilterOptions,
}

impl Endpoint {
    /// Path relative to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Self::Browse => "/bikes",
            Self::Search => "/bikes/search",
            Self::FilterOptions => "/bikes/filters",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// How a list request is served
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestMode {
    /// Structured filters against the listing endpoint
    #[default]
    Browse,
    /// Free-text query against the search endpoint
    Search,
}

impl RequestMode {
    /// Pick the mode for a filter set: search when `q` is non-blank
    pub fn select(filters: &FilterSet) -> Self {
        if filters.search_text().is_some() {
            Self::Search
        } else {
            Self::Browse
        }
    }

    /// Endpoint serving this mode
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Browse => Endpoint::Browse,
            Self::Search => Endpoint::Search,
        }
    }
}

/// A translated request: endpoint plus query parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Selected mode
    pub mode: RequestMode,
    /// Target endpoint
    pub endpoint: Endpoint,
    /// Query parameters (empty values already removed)
    pub params: QueryParams,
}

impl ApiRequest {
    /// Create an empty request for a mode
    pub fn new(mode: RequestMode) -> Self {
        Self {
            mode,
            endpoint: mode.endpoint(),
            params: QueryParams::new(),
        }
    }

    /// Look up a parameter
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Cursor sent with this request, if any
    pub fn cursor(&self) -> Option<&str> {
        self.param("cursor")
    }
}
