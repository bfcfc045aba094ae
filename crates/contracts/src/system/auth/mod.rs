use serde::{Deserialize, Serialize};

use crate::system::users::UserId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Payload returned by `POST /auth/signin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    /// Token scheme, "Bearer" unless the server says otherwise
    #[serde(rename = "type", default = "default_token_type")]
    pub token_type: String,
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// Plain acknowledgement, e.g. the `POST /auth/signup` result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_without_type_defaults_to_bearer() {
        let json = r#"{"token":"abc123","id":1,"username":"alice","email":"a@x.com","roles":["USER"]}"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.token, "abc123");
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.id, UserId::Number(1));
        assert_eq!(response.roles, vec!["USER".to_string()]);
    }

    #[test]
    fn test_register_request_omits_missing_names() {
        let request = RegisterRequest {
            username: "bob".into(),
            email: "b@x.com".into(),
            password: "secret".into(),
            first_name: Some("Bob".into()),
            last_name: None,
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["firstName"], "Bob");
        assert!(value.get("lastName").is_none());
    }
}
