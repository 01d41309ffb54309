//! Uniform result envelope
//!
//! Every controller operation returns an `ApiResult`: success flag, HTTP
//! status code, and the payload when there is one. Only two shapes exist
//! in this core - 200 with data, and 404 with none.

use serde::Serialize;

/// The envelope wrapping every controller outcome
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResult<T> {
    pub success: bool,
    pub status_code: u16,
    pub data: Option<T>,
}

impl<T> ApiResult<T> {
    /// Successful outcome carrying a payload
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            status_code: 200,
            data: Some(data),
        }
    }

    /// Missing-or-invalid outcome; carries no payload
    pub fn not_found() -> Self {
        Self {
            success: false,
            status_code: 404,
            data: None,
        }
    }
}
