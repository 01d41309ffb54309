//! User domain entity
//!
//! Represents an application user managed through the CRUD controller.
//! The store owns the identifier: a record that has not been persisted
//! yet carries an empty id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An application user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppUser {
    /// Store-assigned identifier; empty until the record is persisted
    #[serde(default)]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl AppUser {
    /// Check that both name fields are present (create/update path)
    pub fn has_required_names(&self) -> bool {
        !self.first_name.is_empty() && !self.last_name.is_empty()
    }

    /// Check that the store has assigned an identifier (update/delete path)
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }
}

impl Default for AppUser {
    fn default() -> Self {
        Self {
            id: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            email: None,
            is_active: false,
            created_at: Utc::now(),
        }
    }
}
