//! Actions Client
//!
//! Paged admin-list reads from the actions API.

use super::http;
use crate::config;
use crate::error::FetchError;
use crate::models::{ActionPage, ActionsEnvelope};
use crate::session::SessionStore;

/// Page requested on dashboard mount.
pub const DEFAULT_PAGE: u32 = 1;
/// Items per page the dashboard asks for.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Fetch one page of action records, bearer-authenticated with the stored
/// token. Every call is a fresh round-trip; nothing is cached.
pub async fn admin_list(
    session: &SessionStore,
    page_number: u32,
    page_size: u32,
) -> Result<ActionPage, FetchError> {
    let url = format!(
        "{}/api/v1/actions/admin-list?pageNumber={}&pageSize={}",
        config::ACTIONS_API_URL,
        page_number,
        page_size,
    );

    let mut request = http().get(url);
    if let Some(token) = session.token() {
        request = request.bearer_auth(token);
    }

    let envelope: ActionsEnvelope = request
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(envelope.data)
}
