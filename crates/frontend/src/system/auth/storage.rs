//! Persisted session: the bearer token and the cached signed-in user.
//!
//! Values live in a [`KeyValueStorage`]: `window.localStorage` in the
//! browser, [`MemoryStorage`] elsewhere.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use contracts::system::auth::AuthResponse;
use contracts::system::users::UserId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Failed to write '{key}': {reason}")]
    Write { key: String, reason: String },

    #[error("Failed to serialize session user: {0}")]
    Serialize(String),
}

/// String key-value persistence with Web Storage semantics.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything currently stored
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.items.borrow().clone()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// `window.localStorage`
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_error = |reason: String| StorageError::Write {
            key: key.to_string(),
            reason,
        };
        let storage =
            Self::local_storage().ok_or_else(|| write_error("localStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| write_error(format!("{:?}", e)))
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Cached profile of the signed-in user, plus the token scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub roles: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "type", default)]
    pub token_type: String,
}

impl SessionUser {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}

impl From<&AuthResponse> for SessionUser {
    fn from(response: &AuthResponse) -> Self {
        Self {
            id: response.id.clone(),
            username: response.username.clone(),
            email: response.email.clone(),
            roles: response.roles.iter().cloned().collect(),
            first_name: None,
            last_name: None,
            token_type: response.token_type.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

/// Reads and writes the persisted session.
///
/// Token and user are written and removed together.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStorage>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::new()))
    }

    /// Replace the session. On failure no half-written session remains.
    pub fn set_session(&self, user: &SessionUser, token: &str) -> Result<(), StorageError> {
        let serialized =
            serde_json::to_string(user).map_err(|e| StorageError::Serialize(e.to_string()))?;

        self.storage.set_item(USER_KEY, &serialized)?;
        if let Err(e) = self.storage.set_item(TOKEN_KEY, token) {
            log::error!("Failed to persist token, dropping session: {}", e);
            self.clear();
            return Err(e);
        }
        Ok(())
    }

    pub fn get_token(&self) -> Option<String> {
        self.storage.get_item(TOKEN_KEY)
    }

    /// `None` when nothing is stored or the stored value is unreadable.
    pub fn get_user(&self) -> Option<SessionUser> {
        let raw = self.storage.get_item(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("Ignoring corrupt persisted user: {}", e);
                None
            }
        }
    }

    pub fn session(&self) -> Option<Session> {
        let token = self.get_token().filter(|t| !t.is_empty())?;
        let user = self.get_user()?;
        Some(Session { token, user })
    }

    pub fn has_token(&self) -> bool {
        self.get_token().map_or(false, |t| !t.is_empty())
    }

    pub fn clear(&self) {
        self.storage.remove_item(TOKEN_KEY);
        self.storage.remove_item(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::testing::sample_user;

    /// Accepts every write except to `failing_key`.
    struct FlakyStorage {
        inner: MemoryStorage,
        failing_key: &'static str,
    }

    impl KeyValueStorage for FlakyStorage {
        fn get_item(&self, key: &str) -> Option<String> {
            self.inner.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == self.failing_key {
                return Err(StorageError::Write {
                    key: key.to_string(),
                    reason: "quota exceeded".into(),
                });
            }
            self.inner.set_item(key, value)
        }

        fn remove_item(&self, key: &str) {
            self.inner.remove_item(key)
        }
    }

    #[test]
    fn test_set_then_read_back() {
        let store = SessionStore::in_memory();
        let user = sample_user();

        store.set_session(&user, "abc123").unwrap();

        assert_eq!(store.get_token().as_deref(), Some("abc123"));
        assert_eq!(store.get_user(), Some(user.clone()));
        assert_eq!(
            store.session(),
            Some(Session {
                token: "abc123".into(),
                user
            })
        );
        assert!(store.has_token());
    }

    #[test]
    fn test_set_session_replaces_previous() {
        let store = SessionStore::in_memory();
        store.set_session(&sample_user(), "first").unwrap();

        let mut other = sample_user();
        other.username = "bob".into();
        store.set_session(&other, "second").unwrap();

        assert_eq!(store.get_token().as_deref(), Some("second"));
        assert_eq!(store.get_user().unwrap().username, "bob");
    }

    #[test]
    fn test_clear_removes_both() {
        let storage = Rc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone());
        store.set_session(&sample_user(), "abc123").unwrap();

        store.clear();

        assert_eq!(store.get_token(), None);
        assert_eq!(store.get_user(), None);
        assert!(!store.has_token());
        assert!(storage.snapshot().is_empty());
    }

    #[test]
    fn test_empty_token_is_not_a_token() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set_item(TOKEN_KEY, "").unwrap();
        let store = SessionStore::new(storage);

        assert!(!store.has_token());
        assert_eq!(store.session(), None);
    }

    #[test]
    fn test_corrupt_user_reads_as_absent() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set_item(USER_KEY, "{not json").unwrap();
        let store = SessionStore::new(storage);

        assert_eq!(store.get_user(), None);
    }

    #[test]
    fn test_reads_record_with_extra_fields() {
        let storage = Rc::new(MemoryStorage::new());
        storage
            .set_item(
                USER_KEY,
                r#"{"token":"abc123","type":"Bearer","id":"u-1","username":"alice","email":"a@x.com","roles":["USER","ADMIN"]}"#,
            )
            .unwrap();
        let store = SessionStore::new(storage);

        let user = store.get_user().unwrap();
        assert_eq!(user.id, UserId::Text("u-1".into()));
        assert!(user.has_role("ADMIN"));
        assert_eq!(user.token_type, "Bearer");
    }

    #[test]
    fn test_failed_token_write_leaves_no_user() {
        let store = SessionStore::new(Rc::new(FlakyStorage {
            inner: MemoryStorage::new(),
            failing_key: TOKEN_KEY,
        }));

        let result = store.set_session(&sample_user(), "abc123");

        assert!(matches!(result, Err(StorageError::Write { .. })));
        assert_eq!(store.get_user(), None);
        assert_eq!(store.get_token(), None);
    }

    #[test]
    fn test_failed_user_write_keeps_previous_session() {
        let inner = MemoryStorage::new();
        inner.set_item(TOKEN_KEY, "old").unwrap();
        inner
            .set_item(USER_KEY, &serde_json::to_string(&sample_user()).unwrap())
            .unwrap();
        let store = SessionStore::new(Rc::new(FlakyStorage {
            inner,
            failing_key: USER_KEY,
        }));

        let mut other = sample_user();
        other.username = "bob".into();
        assert!(store.set_session(&other, "new").is_err());

        assert_eq!(store.get_token().as_deref(), Some("old"));
        assert_eq!(store.get_user().unwrap().username, "alice");
    }

    #[test]
    fn test_from_auth_response() {
        let response: AuthResponse = serde_json::from_str(
            r#"{"token":"abc123","id":1,"username":"alice","email":"a@x.com","roles":["USER"]}"#,
        )
        .unwrap();

        let user = SessionUser::from(&response);
        assert_eq!(user, sample_user());
    }
}
