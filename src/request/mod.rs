//! Request translation module
//!
//! Maps a `FilterSet` onto a backend request. Endpoint selection is an
//! explicit two-variant `RequestMode` chosen by a pure predicate, so the
//! whole translation is testable without any transport.

mod translator;
mod types;

pub use translator::{translate, PriceRange, BROWSE_RENAMES};
pub use types::{ApiRequest, Endpoint, RequestMode};

#[cfg(test)]
mod tests;
