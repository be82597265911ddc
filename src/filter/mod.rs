//! Filter module
//!
//! Caller-supplied filter sets and their canonical query identity.
//!
//! # Overview
//!
//! - `FilterSet` - immutable-per-query mapping from filter name to value
//! - `FilterValue` - closed set of value shapes (text, number, bool, list, null)
//! - `QueryKey` - canonical identity used to gate cache reuse

mod key;
mod types;

pub use key::{QueryKey, KEY_SCOPE};
pub use types::{keys, FilterSet, FilterValue};
