use contracts::system::users::{User, UserId, UserPatch};

use crate::shared::http::{ApiClient, ApiError};

/// User resource calls. The client attaches the token; no local role checks.
#[derive(Clone)]
pub struct UserService {
    client: ApiClient,
}

impl UserService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Profile of the signed-in user
    pub async fn get_current_user_profile(&self) -> Result<User, ApiError> {
        self.client.get("/users/profile").await
    }

    /// Returns the record as stored by the server
    pub async fn update_profile(&self, patch: &UserPatch) -> Result<User, ApiError> {
        self.client.put("/users/profile", patch).await
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, ApiError> {
        self.client.get("/users").await
    }

    pub async fn get_user_by_id(&self, id: &UserId) -> Result<User, ApiError> {
        self.client.get(&format!("/users/{}", id)).await
    }

    /// Returns whatever the server answered: JSON as is, plain text as a
    /// string, `Null` for an empty body
    pub async fn delete_user(&self, id: &UserId) -> Result<serde_json::Value, ApiError> {
        self.client.delete(&format!("/users/{}", id)).await
    }
}
