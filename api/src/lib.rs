//! User API core
//!
//! The CRUD core for the user service: a controller that mediates between
//! the request boundary and a generic repository port, wrapping every
//! outcome in a uniform result envelope. Uses hexagonal (ports & adapters)
//! architecture; persistence adapters and the HTTP surface live in the
//! transport crate and are wired in at startup.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;


pub use app::{ApiResult, UserController};
pub use domain::entities::AppUser;
pub use domain::ports::ApplicationRepository;
pub use error::DomainError;
