//! Data loading for the protected pages (dashboard, projects, tasks).
//!
//! Each page first passes [`require_auth`], then pulls its data from an
//! injected source. [`ApiPageSource`] reads from the REST API; tests and
//! previews plug in their own.

pub mod api_source;

use std::future::Future;

use async_trait::async_trait;
use contracts::dashboards::d100_overview::dto::DashboardSummary;
use contracts::domain::a001_project::aggregate::Project;
use contracts::domain::a002_task::aggregate::Task;

pub use api_source::ApiPageSource;

use crate::shared::http::{ApiError, Navigator};
use crate::system::auth::guard::{require_auth, Redirect};
use crate::system::auth::{AuthService, SessionUser};

#[async_trait(?Send)]
pub trait DashboardSource {
    async fn load_dashboard(&self) -> Result<DashboardSummary, ApiError>;
}

#[async_trait(?Send)]
pub trait ProjectSource {
    async fn load_projects(&self) -> Result<Vec<Project>, ApiError>;
}

#[async_trait(?Send)]
pub trait TaskSource {
    async fn load_tasks(&self) -> Result<Vec<Task>, ApiError>;
}

/// Outcome of loading a protected page
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Redirected(Redirect),
    Loaded { user: Option<SessionUser>, data: T },
    Failed(ApiError),
}

impl<T> PageState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            PageState::Loaded { data, .. } => Some(data),
            _ => None,
        }
    }

    /// Name for the page greeting, "User" when the profile is unknown
    pub fn greeting_name(&self) -> &str {
        match self {
            PageState::Loaded {
                user: Some(user), ..
            } => user.username.as_str(),
            _ => "User",
        }
    }
}

/// Gate on the session, then run `load`. Signed-out users never trigger a load.
pub async fn load_page<T, F, Fut>(
    auth: &AuthService,
    navigator: &dyn Navigator,
    load: F,
) -> PageState<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let user = match require_auth(auth, navigator) {
        Ok(user) => user,
        Err(redirect) => return PageState::Redirected(redirect),
    };

    match load().await {
        Ok(data) => PageState::Loaded { user, data },
        Err(e) => {
            log::error!("Failed to load page data: {}", e);
            PageState::Failed(e)
        }
    }
}

pub async fn load_dashboard_page(
    auth: &AuthService,
    navigator: &dyn Navigator,
    source: &dyn DashboardSource,
) -> PageState<DashboardSummary> {
    load_page(auth, navigator, || source.load_dashboard()).await
}

pub async fn load_projects_page(
    auth: &AuthService,
    navigator: &dyn Navigator,
    source: &dyn ProjectSource,
) -> PageState<Vec<Project>> {
    load_page(auth, navigator, || source.load_projects()).await
}

pub async fn load_tasks_page(
    auth: &AuthService,
    navigator: &dyn Navigator,
    source: &dyn TaskSource,
) -> PageState<Vec<Task>> {
    load_page(auth, navigator, || source.load_tasks()).await
}
