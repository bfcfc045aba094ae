pub mod project_status;
pub mod task_priority;
pub mod task_status;

pub use project_status::ProjectStatus;
pub use task_priority::TaskPriority;
pub use task_status::TaskStatus;
