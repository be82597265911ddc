//! Catalog module
//!
//! Wire models for the bikes backend and the service that talks to it.
//!
//! # Overview
//!
//! - `RawBike`, `Page`, `FilterOptions` - lenient response models
//! - `PageSource` - the seam the query layer fetches pages through
//! - `BikeService` - `PageSource` over HTTP, with a TTL cache for filter options

mod lenient;
mod service;
mod types;

pub use service::{BikeService, PageSource, DEFAULT_FILTER_OPTIONS_TTL};
pub use types::{
    Envelope, FilterOptions, Page, PaginationInfo, PriceBounds, RawBike, SortOption,
};

#[cfg(test)]
mod tests;
