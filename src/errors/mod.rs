use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use std::fmt;

use crate::constants::{ERR_INTERNAL, ERR_INVALID_USER, ERR_USER_NOT_FOUND};
use crate::models::ErrorResponse;
use crate::repositories::RepositoryError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    InternalServerError(String),
}

impl ApiError {
    fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(message)
            | ApiError::NotFound(message)
            | ApiError::InternalServerError(message) => message,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(message) => write!(f, "Bad Request: {}", message),
            ApiError::NotFound(message) => write!(f, "Not Found: {}", message),
            ApiError::InternalServerError(message) => {
                write!(f, "Internal Server Error: {}", message)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse::new(status.as_u16(), self.message()))
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::InvalidUser => ApiError::BadRequest(ERR_INVALID_USER.to_string()),
            RepositoryError::NotFound => ApiError::NotFound(ERR_USER_NOT_FOUND.to_string()),
            RepositoryError::Database(e) => {
                // Driver details stay in the log, clients get a generic message.
                error!("Database error: {}", e);
                ApiError::InternalServerError(ERR_INTERNAL.to_string())
            }
        }
    }
}
