use contracts::system::auth::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest};

use super::storage::SessionUser;
use crate::shared::http::{ApiClient, ApiError};

const SIGNIN_PATH: &str = "/auth/signin";
const SIGNUP_PATH: &str = "/auth/signup";

/// Sign-in, sign-up and session queries.
///
/// The only component that writes a session into the store.
#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Login with username and password
    ///
    /// A response carrying a non-empty token becomes the new session. The
    /// whole payload is returned either way; failures are passed through.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self.client.post(SIGNIN_PATH, credentials).await?;

        if response.token.is_empty() {
            log::warn!("Sign-in for {} returned no token", response.username);
        } else {
            self.client
                .session()
                .set_session(&SessionUser::from(&response), &response.token)?;
            log::info!("Signed in as {}", response.username);
        }

        Ok(response)
    }

    /// Create an account. Does not sign in and never touches the session.
    ///
    /// Unlike every other call, a 401 from sign-up does not sign the current
    /// user out: the request does not depend on the stored token.
    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ApiError> {
        self.client
            .post_preserving_session(SIGNUP_PATH, request)
            .await
    }

    /// Local only; the server is not contacted.
    pub fn logout(&self) {
        self.client.session().clear();
        log::info!("Signed out");
    }

    pub fn get_current_user(&self) -> Option<SessionUser> {
        self.client.session().get_user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.session().has_token()
    }

    pub fn login_path(&self) -> &str {
        &self.client.config().login_path
    }
}
