//! Bikes backend service

use super::types::{Envelope, FilterOptions, Page, RawBike};
use crate::error::Result;
use crate::filter::FilterSet;
use crate::http::HttpClient;
use crate::request::{translate, ApiRequest, Endpoint};
use crate::types::QueryParams;
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Filter options change rarely; cache them for an hour by default
pub const DEFAULT_FILTER_OPTIONS_TTL: Duration = Duration::from_secs(60 * 60);

/// Anything that can serve one page of a translated request
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page described by `request`
    async fn fetch_page(&self, request: &ApiRequest) -> Result<Page<RawBike>>;
}

#[derive(Debug, Clone)]
struct CachedOptions {
    fetched_at: Instant,
    options: FilterOptions,
}

/// HTTP-backed catalog service
#[derive(Debug)]
pub struct BikeService {
    client: HttpClient,
    filter_options_ttl: Duration,
    filter_options: RwLock<Option<CachedOptions>>,
}

impl BikeService {
    /// Create a service over an HTTP client
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            filter_options_ttl: DEFAULT_FILTER_OPTIONS_TTL,
            filter_options: RwLock::new(None),
        }
    }

    /// Set how long filter options stay cached
    #[must_use]
    pub fn with_filter_options_ttl(mut self, ttl: Duration) -> Self {
        self.filter_options_ttl = ttl;
        self
    }

    /// Get the HTTP client
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Fetch one page for a filter set
    pub async fn list(&self, filters: &FilterSet, cursor: Option<&str>) -> Result<Page<RawBike>> {
        let request = translate(filters, cursor)?;
        self.fetch_page(&request).await
    }

    /// Fetch filter options, served from cache while fresh
    pub async fn filter_options(&self) -> Result<FilterOptions> {
        {
            let cached = self.filter_options.read().await;
            if let Some(entry) = cached.as_ref() {
                if entry.fetched_at.elapsed() < self.filter_options_ttl {
                    debug!("Filter options served from cache");
                    return Ok(entry.options.clone());
                }
            }
        }

        let envelope: Envelope<FilterOptions> = self
            .client
            .get_json(Endpoint::FilterOptions.path(), &QueryParams::new())
            .await?;

        info!(
            "Fetched filter options: {} brands, {} years",
            envelope.data.brands.len(),
            envelope.data.years.len()
        );

        let mut cached = self.filter_options.write().await;
        *cached = Some(CachedOptions {
            fetched_at: Instant::now(),
            options: envelope.data.clone(),
        });

        Ok(envelope.data)
    }

    /// Drop cached filter options
    pub async fn invalidate_filter_options(&self) {
        *self.filter_options.write().await = None;
    }
}

#[async_trait]
impl PageSource for BikeService {
    async fn fetch_page(&self, request: &ApiRequest) -> Result<Page<RawBike>> {
        debug!(
            "GET {} ({:?}) cursor={:?}",
            request.endpoint,
            request.mode,
            request.cursor()
        );
        let page: Page<RawBike> = self
            .client
            .get_json(request.endpoint.path(), &request.params)
            .await?;
        debug!(
            "Page from {}: {} records, next cursor {:?}",
            request.endpoint,
            page.len(),
            page.next_cursor()
        );
        Ok(page)
    }
}
