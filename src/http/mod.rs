//! HTTP client module
//!
//! Thin `reqwest` wrapper for the catalog backend.
//!
//! # Features
//!
//! - **Base URL**: endpoint paths are joined onto a configured base
//! - **Timeouts**: every request is bounded (default 30s)
//! - **Sessions**: credentials come from an explicit `Session`
//! - **Error mapping**: non-2xx responses become typed errors carrying the
//!   status and the server's message

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
