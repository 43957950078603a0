use thiserror::Error;

use crate::constants::{ERR_INVALID_USER, ERR_USER_NOT_FOUND};

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The record carries no identifier; checked before any store access.
    #[error("{}", ERR_INVALID_USER)]
    InvalidUser,

    #[error("{}", ERR_USER_NOT_FOUND)]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}
