//! Remote API Clients
//!
//! Thin service wrappers over the HTTP client, organized by endpoint.

mod actions;
mod auth;

// Re-export all public items
pub use actions::*;
pub use auth::*;

/// Shared HTTP client handle. On wasm32 this is a cheap wrapper over the
/// browser's fetch.
pub(crate) fn http() -> reqwest::Client {
    reqwest::Client::new()
}
