//! Error Types
//!
//! One failure domain per remote collaborator. User-facing text is decided
//! at the view boundary; these carry the diagnostic cause for the console.

use thiserror::Error;

/// Login attempt failed.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Transport failure or non-success status from the authentication API.
    #[error("login request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API answered, but without a usable token in the body.
    #[error("no valid token received")]
    EmptyToken,
}

/// Actions page load failed (transport, status, or body decode).
#[derive(Debug, Error)]
#[error("actions request failed: {0}")]
pub struct FetchError(#[from] reqwest::Error);
