//! Query module
//!
//! `BikeQuery` drives one logical list query: it owns the current filter set
//! and its key, translates each page request, fetches it through a
//! `PageSource`, and accumulates the result.
//!
//! Identity gating: setting a filter set with the same key is a no-op, so an
//! in-flight or finished query is never re-issued. A different key resets the
//! accumulated pages, and any response still in flight for the old key is
//! dropped when it arrives.

mod types;

pub use types::{FetchOutcome, QueryOptions, QuerySnapshot};

use crate::catalog::{PageSource, RawBike};
use crate::error::Result;
use crate::filter::{keys, FilterSet, QueryKey};
use crate::pagination::{Completion, FetchFailure, FetchTicket, PageAccumulator};
use crate::request::translate;
use crate::transform::{to_display_item, DisplayItem};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

struct QueryInner {
    filters: FilterSet,
    key: QueryKey,
    pages: PageAccumulator<RawBike>,
}

/// One logical, identity-gated list query
pub struct BikeQuery {
    source: Arc<dyn PageSource>,
    inner: Mutex<QueryInner>,
}

impl BikeQuery {
    /// Create a query for a filter set. Nothing is fetched until `fetch`.
    ///
    /// A `cursor` entry in the filter set is ignored: pages are addressed by
    /// the query itself, starting from the first.
    pub fn new(source: Arc<dyn PageSource>, filters: FilterSet, options: QueryOptions) -> Self {
        let filters = filters.without(keys::CURSOR);
        let key = QueryKey::of(&filters);
        Self {
            source,
            inner: Mutex::new(QueryInner {
                filters,
                key,
                pages: PageAccumulator::new(options.infinite),
            }),
        }
    }

    /// Current query key
    pub async fn key(&self) -> QueryKey {
        self.inner.lock().await.key.clone()
    }

    /// Current filter set
    pub async fn filters(&self) -> FilterSet {
        self.inner.lock().await.filters.clone()
    }

    /// Switch to a new filter set.
    ///
    /// Returns `false` (and keeps everything) when the key is unchanged. As in
    /// `new`, a `cursor` entry is dropped, so a new identity always starts
    /// from the first page.
    pub async fn set_filters(&self, filters: FilterSet) -> bool {
        let filters = filters.without(keys::CURSOR);
        let key = QueryKey::of(&filters);
        let mut inner = self.inner.lock().await;
        if inner.key == key {
            debug!("Filters unchanged for {key}");
            return false;
        }

        info!("Query identity changed: {} -> {}", inner.key, key);
        inner.filters = filters;
        inner.key = key;
        inner.pages.reset();
        true
    }

    /// Fetch the first page, unless it is loaded or already in flight
    pub async fn fetch(&self) -> Result<FetchOutcome> {
        let started = {
            let mut inner = self.inner.lock().await;
            inner
                .pages
                .begin_first()
                .map(|ticket| (ticket, inner.filters.clone()))
        };
        self.run(started).await
    }

    /// Fetch the next page.
    ///
    /// A no-op unless the last page reported a cursor, infinite scrolling is
    /// on, and nothing is in flight.
    pub async fn fetch_next_page(&self) -> Result<FetchOutcome> {
        let started = {
            let mut inner = self.inner.lock().await;
            inner
                .pages
                .begin_next()
                .map(|ticket| (ticket, inner.filters.clone()))
        };
        self.run(started).await
    }

    /// Re-attempt the page request that failed, with the same cursor
    pub async fn retry(&self) -> Result<FetchOutcome> {
        let started = {
            let mut inner = self.inner.lock().await;
            inner
                .pages
                .begin_retry()
                .map(|ticket| (ticket, inner.filters.clone()))
        };
        self.run(started).await
    }

    /// Fetch the first page and keep paging until exhausted or `max_pages`
    /// pages are loaded
    pub async fn fetch_pages(&self, max_pages: usize) -> Result<usize> {
        self.fetch().await?;
        loop {
            let loaded = self.inner.lock().await.pages.pages().len();
            if loaded >= max_pages {
                return Ok(loaded);
            }
            if self.fetch_next_page().await? == FetchOutcome::Skipped {
                return Ok(loaded);
            }
        }
    }

    async fn run(&self, started: Option<(FetchTicket, FilterSet)>) -> Result<FetchOutcome> {
        let Some((ticket, filters)) = started else {
            debug!("Fetch skipped: nothing to do in current state");
            return Ok(FetchOutcome::Skipped);
        };

        let result = match translate(&filters, ticket.cursor.as_deref()) {
            Ok(request) => self.source.fetch_page(&request).await,
            Err(e) => Err(e),
        };

        let mut inner = self.inner.lock().await;
        match result {
            Ok(page) => {
                let count = page.len();
                match inner.pages.complete(&ticket, Ok(page)) {
                    Completion::Stale => {
                        debug!("Discarding stale page (generation {})", ticket.generation);
                        Ok(FetchOutcome::Discarded)
                    }
                    _ => Ok(FetchOutcome::Appended {
                        records: count,
                        has_more: inner.pages.has_more(),
                    }),
                }
            }
            Err(e) => match inner.pages.complete(&ticket, Err(FetchFailure::from(&e))) {
                Completion::Stale => {
                    debug!("Discarding stale failure: {e}");
                    Ok(FetchOutcome::Discarded)
                }
                _ => {
                    warn!("Fetch failed for {}: {e}", inner.key);
                    Err(e)
                }
            },
        }
    }

    /// Flattened display items across all loaded pages
    pub async fn items(&self) -> Vec<DisplayItem> {
        self.inner.lock().await.pages.items(to_display_item)
    }

    /// Check if another page can be requested
    pub async fn has_more(&self) -> bool {
        self.inner.lock().await.pages.has_more()
    }

    /// Check if the first page is loading
    pub async fn is_loading(&self) -> bool {
        self.inner.lock().await.pages.is_loading()
    }

    /// Check if a later page is loading
    pub async fn is_fetching_next(&self) -> bool {
        self.inner.lock().await.pages.is_fetching_next()
    }

    /// Point-in-time view of the query result
    pub async fn snapshot(&self) -> QuerySnapshot {
        let inner = self.inner.lock().await;
        QuerySnapshot {
            key: inner.key.to_string(),
            state: inner.pages.state(),
            pages: inner.pages.pages().len(),
            items: inner.pages.items(to_display_item),
            has_more: inner.pages.has_more(),
            is_loading: inner.pages.is_loading(),
            is_fetching_next: inner.pages.is_fetching_next(),
            error: inner.pages.failure().cloned(),
        }
    }
}

impl std::fmt::Debug for BikeQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BikeQuery").finish_non_exhaustive()
    }
}
