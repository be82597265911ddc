//! CLI module
//!
//! Command-line interface for querying the catalog.
//!
//! # Commands
//!
//! - `browse` - List bikes with structured filters
//! - `search` - Free-text search
//! - `filters` - Show available filter options
//! - `key` - Print the query key for a filter set
//! - `form` - Render or validate a built-in form

mod commands;
mod runner;

pub use commands::{filters_from_pairs, BrowseArgs, Cli, Commands, FormatArg};
pub use runner::Runner;
