pub mod api;
pub mod guard;
pub mod storage;

pub use api::AuthService;
pub use storage::{Session, SessionStore, SessionUser};
