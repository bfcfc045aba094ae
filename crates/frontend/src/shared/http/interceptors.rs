//! Request and response interception.
//!
//! Both hooks are plain functions over the session store so they can be
//! exercised without a client or a network.

use super::{ApiError, ApiRequest, ApiResponse, Navigator, AUTHORIZATION};
use crate::system::auth::storage::SessionStore;

/// Attaches `Authorization: Bearer <token>` when a non-empty token is stored.
/// Leaves the request untouched otherwise.
pub fn augment_request(mut request: ApiRequest, session: &SessionStore) -> ApiRequest {
    if let Some(token) = session.get_token().filter(|t| !t.is_empty()) {
        request
            .headers
            .insert(AUTHORIZATION.to_string(), format!("Bearer {}", token));
    }
    request
}

/// Passes successes through. On a 401 failure clears the session and
/// redirects to `login_path`; the failure is returned to the caller either way.
pub fn handle_response(
    result: Result<ApiResponse, ApiError>,
    session: &SessionStore,
    navigator: &dyn Navigator,
    login_path: &str,
) -> Result<ApiResponse, ApiError> {
    if let Err(error) = &result {
        if error.is_unauthorized() {
            log::warn!("Server rejected the session token, signing out");
            session.clear();
            navigator.redirect(login_path);
        }
    }
    result
}
