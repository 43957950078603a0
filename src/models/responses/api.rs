//! Generic API response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error response structure
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body
    #[schema(example = 404)]
    pub status: u16,
    /// Error message
    #[schema(example = "User not found")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(status: u16, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Health status
    #[schema(example = "OK")]
    pub status: String,
    /// Status message
    #[schema(example = "Server is running")]
    pub message: String,
}
