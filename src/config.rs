//! Build-time Configuration
//!
//! API bases come from the environment at compile time and must be
//! absolute URLs; the defaults point at a local dev server.

/// Base URL of the authentication API (`POST /Authentication/Login`).
pub const AUTH_API_URL: &str = match option_env!("AUTH_API_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

/// Base URL of the actions API (`GET /api/v1/actions/admin-list`).
pub const ACTIONS_API_URL: &str = match option_env!("ACTIONS_API_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

/// Minimum time the login spinner stays visible, in milliseconds.
/// 0 disables the delay.
pub const LOGIN_MIN_SPINNER_MS: u32 = 400;
