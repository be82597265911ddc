//! Pagination module
//!
//! Cursor-driven page accumulation for one logical query.
//!
//! # Overview
//!
//! `PageAccumulator` holds the append-only page sequence of a query identity
//! and the state machine around it:
//!
//! ```text
//! Idle -> Fetching -> Ready <-> FetchingNext
//!                       |            |
//!                       v            v
//!                   Exhausted     Failed (also from Fetching)
//! ```
//!
//! Every fetch is represented by a `FetchTicket`. Only the ticket currently in
//! flight may complete; tickets issued before a `reset` are stale and their
//! results are discarded.

mod accumulator;
mod types;

pub use accumulator::PageAccumulator;
pub use types::{Completion, FetchFailure, FetchTicket, PageState};
