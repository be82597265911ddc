//! Authentication module
//!
//! Supports: anonymous, Bearer token, API key header
//!
//! Credentials live in an explicit `Session` handed to the HTTP client when it
//! is built. There is no process-wide token store.

mod session;
mod types;

pub use session::Session;
pub use types::AuthConfig;
