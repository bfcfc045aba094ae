use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::interceptors::{augment_request, handle_response};
use super::{ApiError, ApiRequest, ApiResponse, Method, Navigator, Transport};
use crate::shared::api_utils::api_url;
use crate::shared::config::ApiConfig;
use crate::system::auth::storage::SessionStore;

/// Shared entry point for all calls to the REST API.
///
/// Cloning is cheap; clones share the transport, session store and navigator.
#[derive(Clone)]
pub struct ApiClient {
    inner: Rc<Inner>,
}

struct Inner {
    config: ApiConfig,
    transport: Rc<dyn Transport>,
    session: SessionStore,
    navigator: Rc<dyn Navigator>,
}

impl ApiClient {
    /// No network activity happens here.
    pub fn new(
        config: ApiConfig,
        transport: Rc<dyn Transport>,
        session: SessionStore,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                config,
                transport,
                session,
                navigator,
            }),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::Get, path, None, true).await?.json()
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        self.send(Method::Post, path, Some(body), true).await?.json()
    }

    /// POST whose 401 answer does not end the current session.
    ///
    /// For endpoints that do not consume the stored token, such as sign-up.
    pub async fn post_preserving_session<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        self.send(Method::Post, path, Some(body), false).await?.json()
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        self.send(Method::Put, path, Some(body), true).await?.json()
    }

    /// DELETE returning whatever the server sent: JSON as is, plain text as a
    /// string, `null` for an empty body.
    pub async fn delete(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        Ok(self.send(Method::Delete, path, None, true).await?.body_value())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        sign_out_on_unauthorized: bool,
    ) -> Result<ApiResponse, ApiError> {
        let inner = &self.inner;

        let mut request = ApiRequest::new(method, api_url(&inner.config.base_url, path));
        request.headers = inner.config.default_headers.clone();
        request.body = body;
        let request = augment_request(request, &inner.session);

        log::debug!("{} {}", request.method, request.url);
        let result = inner
            .transport
            .send(request)
            .await
            .and_then(ApiResponse::error_for_status);

        if let Err(e) = &result {
            log::warn!("{} {} failed: {}", method, path, e);
        }

        if sign_out_on_unauthorized {
            handle_response(
                result,
                &inner.session,
                inner.navigator.as_ref(),
                &inner.config.login_path,
            )
        } else {
            result
        }
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}
