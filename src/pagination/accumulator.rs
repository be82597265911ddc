//! Page accumulator

use super::types::{Completion, FetchFailure, FetchTicket, PageState};
use crate::catalog::Page;

#[derive(Debug, Clone)]
struct FailedFetch {
    cursor: Option<String>,
    failure: FetchFailure,
}

/// Append-only page sequence for one query identity
#[derive(Debug, Clone)]
pub struct PageAccumulator<R> {
    pages: Vec<Page<R>>,
    state: PageState,
    infinite: bool,
    generation: u64,
    next_seq: u64,
    in_flight: Option<FetchTicket>,
    failed: Option<FailedFetch>,
}

impl<R> Default for PageAccumulator<R> {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<R> PageAccumulator<R> {
    /// Create an accumulator.
    ///
    /// With `infinite` off the accumulator never reports more pages, so a
    /// query stops after its first page whatever the server says.
    pub fn new(infinite: bool) -> Self {
        Self {
            pages: Vec::new(),
            state: PageState::Idle,
            infinite,
            generation: 0,
            next_seq: 0,
            in_flight: None,
            failed: None,
        }
    }

    /// Current state
    pub fn state(&self) -> PageState {
        self.state
    }

    /// Loaded pages in fetch order
    pub fn pages(&self) -> &[Page<R>] {
        &self.pages
    }

    /// Identity generation
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Check if infinite scrolling is enabled
    pub fn is_infinite(&self) -> bool {
        self.infinite
    }

    /// Discard everything and start over for a new identity.
    ///
    /// Any ticket issued before this call becomes stale.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.pages.clear();
        self.state = PageState::Idle;
        self.in_flight = None;
        self.failed = None;
    }

    /// Start the first-page fetch; `None` unless idle
    pub fn begin_first(&mut self) -> Option<FetchTicket> {
        if self.state != PageState::Idle {
            return None;
        }
        Some(self.issue(None, PageState::Fetching))
    }

    /// Start the next-page fetch; `None` unless ready with more pages
    pub fn begin_next(&mut self) -> Option<FetchTicket> {
        if self.state != PageState::Ready || !self.has_more() {
            return None;
        }
        let cursor = self.next_cursor().map(str::to_string);
        Some(self.issue(cursor, PageState::FetchingNext))
    }

    /// Re-issue the request that failed, with the same cursor
    pub fn begin_retry(&mut self) -> Option<FetchTicket> {
        if self.state != PageState::Failed {
            return None;
        }
        let failed = self.failed.take()?;
        let state = if self.pages.is_empty() {
            PageState::Fetching
        } else {
            PageState::FetchingNext
        };
        Some(self.issue(failed.cursor, state))
    }

    fn issue(&mut self, cursor: Option<String>, state: PageState) -> FetchTicket {
        self.next_seq += 1;
        let ticket = FetchTicket {
            generation: self.generation,
            seq: self.next_seq,
            cursor,
        };
        self.state = state;
        self.in_flight = Some(ticket.clone());
        ticket
    }

    /// Check if `ticket` is the fetch currently in flight
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.in_flight.as_ref() == Some(ticket)
    }

    /// Record the outcome of a fetch
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: std::result::Result<Page<R>, FetchFailure>,
    ) -> Completion {
        if !self.is_current(ticket) {
            return Completion::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(page) => {
                self.pages.push(page);
                self.state = if self.has_more() {
                    PageState::Ready
                } else {
                    PageState::Exhausted
                };
                Completion::Appended
            }
            Err(failure) => {
                self.failed = Some(FailedFetch {
                    cursor: ticket.cursor.clone(),
                    failure,
                });
                self.state = PageState::Failed;
                Completion::Failed
            }
        }
    }

    /// Cursor reported by the last loaded page
    pub fn next_cursor(&self) -> Option<&str> {
        self.pages.last().and_then(Page::next_cursor)
    }

    /// Check if another page can be requested
    pub fn has_more(&self) -> bool {
        self.infinite && self.next_cursor().is_some()
    }

    /// First page of this identity in flight
    pub fn is_loading(&self) -> bool {
        self.state == PageState::Fetching
    }

    /// Subsequent page in flight
    pub fn is_fetching_next(&self) -> bool {
        self.state == PageState::FetchingNext
    }

    /// Failure of the last fetch, if it failed
    pub fn failure(&self) -> Option<&FetchFailure> {
        self.failed.as_ref().map(|f| &f.failure)
    }

    /// Total records across all pages
    pub fn record_count(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }

    /// Flatten all pages through `transform`, in fetch order
    pub fn items<D>(&self, transform: impl Fn(&R) -> D) -> Vec<D> {
        self.pages
            .iter()
            .flat_map(|page| page.data.iter())
            .map(transform)
            .collect()
    }
}
