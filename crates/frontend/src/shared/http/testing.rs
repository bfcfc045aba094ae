//! In-memory doubles for the transport, navigator and storage.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use contracts::system::users::UserId;

use super::{ApiClient, ApiError, ApiRequest, ApiResponse, Navigator, Transport};
use crate::shared::config::ApiConfig;
use crate::system::auth::storage::{MemoryStorage, SessionStore, SessionUser};

/// Replays scripted responses in order and records what was sent.
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub(crate) fn push_ok(&self, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse::new(status, body)));
    }

    pub(crate) fn push_err(&self, error: ApiError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub(crate) fn last_request(&self) -> Option<ApiRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".into())))
    }
}

#[derive(Default)]
pub(crate) struct RecordingNavigator {
    redirects: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub(crate) fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.redirects.borrow_mut().push(path.to_string());
    }
}

/// A client wired to in-memory collaborators, with handles to inspect them.
pub(crate) struct Harness {
    pub(crate) transport: Rc<MockTransport>,
    pub(crate) navigator: Rc<RecordingNavigator>,
    pub(crate) storage: Rc<MemoryStorage>,
    pub(crate) client: ApiClient,
}

impl Harness {
    pub(crate) fn new() -> Self {
        let transport = Rc::new(MockTransport::default());
        let navigator = Rc::new(RecordingNavigator::default());
        let storage = Rc::new(MemoryStorage::new());
        let client = ApiClient::new(
            ApiConfig::default(),
            transport.clone(),
            SessionStore::new(storage.clone()),
            navigator.clone(),
        );
        Self {
            transport,
            navigator,
            storage,
            client,
        }
    }
}

pub(crate) fn sample_user() -> SessionUser {
    SessionUser {
        id: UserId::Number(1),
        username: "alice".into(),
        email: "a@x.com".into(),
        roles: ["USER".to_string()].into_iter().collect(),
        first_name: None,
        last_name: None,
        token_type: "Bearer".into(),
    }
}
