use super::api::AuthService;
use super::storage::SessionUser;
use crate::shared::http::Navigator;

/// Navigation issued instead of showing a protected page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: String,
}

/// Gate for pages that require authentication.
///
/// Signed out: navigates to the login page and returns the redirect.
/// Signed in: returns the cached user, which may be absent if the stored
/// profile could not be read.
pub fn require_auth(
    auth: &AuthService,
    navigator: &dyn Navigator,
) -> Result<Option<SessionUser>, Redirect> {
    if !auth.is_authenticated() {
        let to = auth.login_path().to_string();
        log::debug!("Not authenticated, redirecting to {}", to);
        navigator.redirect(&to);
        return Err(Redirect { to });
    }
    Ok(auth.get_current_user())
}
