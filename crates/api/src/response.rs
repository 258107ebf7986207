//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "message": ... }` body returned by mutating endpoints that do not echo
/// the entity back.
///
/// # Example
///
/// ```ignore
/// Ok(Json(MessageResponse::new("Person deleted")))
/// ```
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
