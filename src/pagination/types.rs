//! Pagination types

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Lifecycle of an accumulated query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageState {
    /// Nothing fetched for this identity yet
    #[default]
    Idle,
    /// First page in flight
    Fetching,
    /// At least one page loaded, more available
    Ready,
    /// Next page in flight
    FetchingNext,
    /// Last page loaded (or paging disabled)
    Exhausted,
    /// Last fetch failed; pages loaded before it are kept
    Failed,
}

impl PageState {
    /// Check if a fetch is in flight
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Fetching | Self::FetchingNext)
    }
}

/// Handle for one page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Identity generation the ticket was issued for
    pub generation: u64,
    /// Sequence number within the accumulator
    pub seq: u64,
    /// Cursor to request; `None` for the first page
    pub cursor: Option<String>,
}

/// What happened when a ticket completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Page appended
    Appended,
    /// Failure recorded
    Failed,
    /// Ticket no longer current; result dropped
    Stale,
}

/// Cloneable record of a failed fetch, kept as part of the query result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFailure {
    /// Error message, including the server's message when it sent one
    pub message: String,
    /// HTTP status, when the failure came from a response
    pub status: Option<u16>,
    /// Whether a manual retry could succeed
    pub retryable: bool,
}

impl FetchFailure {
    /// Create a failure from a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            retryable: false,
        }
    }
}

impl From<&Error> for FetchFailure {
    fn from(error: &Error) -> Self {
        Self {
            message: error.to_string(),
            status: error.status(),
            retryable: error.is_retryable(),
        }
    }
}
