use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::ProjectStatus;

/// Project card as listed by `GET /projects`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    /// Completion in percent, 0..=100
    pub progress: u8,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub team_members: u32,
    pub tasks: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_from_wire() {
        let json = r#"{
            "id": 1,
            "name": "Website Redesign",
            "description": "Refresh the public site",
            "status": "In Progress",
            "progress": 65,
            "startDate": "2025-03-01",
            "endDate": "2025-05-15",
            "teamMembers": 4,
            "tasks": 24
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(project.status, ProjectStatus::InProgress);
        assert_eq!(project.start_date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(project.team_members, 4);
    }
}
