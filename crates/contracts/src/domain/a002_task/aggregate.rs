use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{TaskPriority, TaskStatus};

/// Task row as listed by `GET /tasks`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub due_date: NaiveDate,
    /// Owning project name
    pub project: String,
    pub assigned_to: String,
}
