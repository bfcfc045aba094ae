//! Wire types shared between the frontend and the REST backend.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod system;
