//! Authentication Client
//!
//! Login call against the authentication API. On success the token is
//! handed to the session store before it is returned.

use serde::Serialize;

use super::http;
use crate::config;
use crate::error::AuthError;
use crate::models::Credentials;
use crate::session::SessionStore;

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// What the login endpoint answered with: the bare token, or nothing usable.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenResponse {
    Token(String),
    Empty,
}

impl TokenResponse {
    /// The endpoint returns the token as the raw response body — sometimes
    /// JSON-quoted, sometimes empty or `null`.
    fn from_body(body: &str) -> Self {
        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return TokenResponse::Empty;
        }
        let token = serde_json::from_str::<String>(trimmed)
            .unwrap_or_else(|_| trimmed.to_string());
        if token.is_empty() {
            TokenResponse::Empty
        } else {
            TokenResponse::Token(token)
        }
    }
}

/// Submit credentials; store and return the bearer token on success.
///
/// The caller validates the input first; this does not re-check it.
/// The session store is left untouched on any failure.
pub async fn login(session: &SessionStore, credentials: &Credentials) -> Result<String, AuthError> {
    let body = http()
        .post(format!("{}/Authentication/Login", config::AUTH_API_URL))
        .json(&LoginRequest {
            username: &credentials.email,
            password: &credentials.password,
        })
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    match TokenResponse::from_body(&body) {
        TokenResponse::Token(token) => {
            session.set_token(&token);
            Ok(token)
        }
        TokenResponse::Empty => Err(AuthError::EmptyToken),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_token_body() {
        assert_eq!(
            TokenResponse::from_body("eyJhbGciOiJIUzI1NiJ9.e30.x"),
            TokenResponse::Token("eyJhbGciOiJIUzI1NiJ9.e30.x".into())
        );
    }

    #[test]
    fn json_quoted_token_is_unquoted() {
        assert_eq!(
            TokenResponse::from_body("\"abc123\""),
            TokenResponse::Token("abc123".into())
        );
    }

    #[test]
    fn falsy_bodies_are_empty() {
        assert_eq!(TokenResponse::from_body(""), TokenResponse::Empty);
        assert_eq!(TokenResponse::from_body("   "), TokenResponse::Empty);
        assert_eq!(TokenResponse::from_body("null"), TokenResponse::Empty);
        assert_eq!(TokenResponse::from_body("\"\""), TokenResponse::Empty);
    }
}
