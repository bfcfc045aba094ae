use serde::{Deserialize, Serialize};

/// Counters shown on the dashboard overview
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_projects: u32,
    pub completed_projects: u32,
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub pending_tasks: u32,
    pub team_members: u32,
}

impl DashboardSummary {
    /// Completed projects in percent, rounded; 0 when there are no projects
    pub fn project_completion_rate(&self) -> u32 {
        completion_rate(self.completed_projects, self.total_projects)
    }

    /// Completed tasks in percent, rounded; 0 when there are no tasks
    pub fn task_completion_rate(&self) -> u32 {
        completion_rate(self.completed_tasks, self.total_tasks)
    }
}

fn completion_rate(done: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(done) * 100.0 / f64::from(total)).round() as u32
}
