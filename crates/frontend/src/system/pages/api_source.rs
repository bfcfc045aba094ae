use async_trait::async_trait;
use contracts::dashboards::d100_overview::dto::DashboardSummary;
use contracts::domain::a001_project::aggregate::Project;
use contracts::domain::a002_task::aggregate::Task;

use super::{DashboardSource, ProjectSource, TaskSource};
use crate::shared::http::{ApiClient, ApiError};

/// Page data straight from the REST API
#[derive(Clone)]
pub struct ApiPageSource {
    client: ApiClient,
}

impl ApiPageSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl DashboardSource for ApiPageSource {
    async fn load_dashboard(&self) -> Result<DashboardSummary, ApiError> {
        self.client.get("/dashboard").await
    }
}

#[async_trait(?Send)]
impl ProjectSource for ApiPageSource {
    async fn load_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.client.get("/projects").await
    }
}

#[async_trait(?Send)]
impl TaskSource for ApiPageSource {
    async fn load_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.client.get("/tasks").await
    }
}
