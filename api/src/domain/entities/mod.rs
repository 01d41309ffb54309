//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod user;

pub use user::AppUser;
