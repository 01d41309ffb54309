//! Application layer
//!
//! Contains use cases and service orchestration. The controller
//! coordinates between domain entities and the repository port.

pub mod api_result;
pub mod user_controller;

pub use api_result::ApiResult;
pub use user_controller::UserController;
