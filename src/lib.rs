// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Moto Catalog
//!
//! Filtered, cursor-paginated list queries against the bikes backend.
//!
//! ## Features
//!
//! - **Query identity**: canonical keys so equal filter sets share one query
//! - **Browse or search**: filter sets are translated onto the right endpoint
//! - **Cursor pagination**: pages accumulate in order until the server stops
//!   sending a cursor
//! - **Stale-response safety**: responses for replaced filter sets are dropped
//! - **Display items**: raw records are projected into UI-ready items
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use moto_catalog::{
//!     BikeQuery, BikeService, FilterSet, HttpClient, HttpClientConfig, QueryOptions, Result,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = HttpClientConfig::builder()
//!         .base_url("https://api.example.com/v1")
//!         .build();
//!     let service = Arc::new(BikeService::new(HttpClient::with_config(config)?));
//!
//!     let filters = FilterSet::new().with("brand", "bmw").with("price", "5000-12000");
//!     let query = BikeQuery::new(service, filters, QueryOptions::default());
//!
//!     query.fetch().await?;
//!     while query.has_more().await {
//!         query.fetch_next_page().await?;
//!     }
//!
//!     for item in query.items().await {
//!         println!("{} {}", item.brand, item.title);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           BikeQuery                             │
//! │  set_filters()   fetch()   fetch_next_page()   retry()  items() │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌───────────┬───────────┬──────┴──────┬─────────────┬────────────┐
//! │  Filter   │  Request  │ Pagination  │  Catalog    │ Transform  │
//! ├───────────┼───────────┼─────────────┼─────────────┼────────────┤
//! │ FilterSet │ Browse    │ Accumulator │ PageSource  │ DisplayItem│
//! │ QueryKey  │ Search    │ Tickets     │ BikeService │ Badges     │
//! │           │ Price     │ States      │ HttpClient  │ Images     │
//! └───────────┴───────────┴─────────────┴─────────────┴────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Filter sets and query keys
pub mod filter;

/// Filter set to backend request translation
pub mod request;

/// Authentication and sessions
pub mod auth;

/// HTTP client
pub mod http;

/// Wire models and the catalog service
pub mod catalog;

/// Raw record to display item projection
pub mod transform;

/// Page accumulation and fetch state
pub mod pagination;

/// Identity-gated list queries
pub mod query;

/// Declarative forms
pub mod form;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use catalog::{BikeService, FilterOptions, Page, PageSource, RawBike};
pub use config::ClientConfig;
pub use filter::{FilterSet, FilterValue, QueryKey};
pub use http::{HttpClient, HttpClientConfig};
pub use pagination::PageAccumulator;
pub use query::{BikeQuery, FetchOutcome, QueryOptions, QuerySnapshot};
pub use request::{translate, ApiRequest, RequestMode};
pub use transform::{to_display_item, DisplayItem};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
