//! User service: the read-merge-write sequences behind the HTTP handlers.

use log::{debug, info, warn};

use crate::constants::ERR_USER_NOT_FOUND;
use crate::errors::ApiError;
use crate::models::{CreateUserRequest, UpdateUserRequest, User};
use crate::repositories::UserRepository;
use crate::utils::mask_email;

#[derive(Clone)]
pub struct UserService {
    repository: UserRepository,
}

impl UserService {
    pub fn new(repository: UserRepository) -> Self {
        Self { repository }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let users = self.repository.find_all().await?;
        debug!("Listing {} users", users.len());
        Ok(users)
    }

    pub async fn create_user(&self, req: CreateUserRequest) -> Result<User, ApiError> {
        info!("Creating user with email: {}", mask_email(&req.email));
        Ok(self.repository.create(req.into()).await?)
    }

    pub async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            warn!("User not found with id: {}", id);
            ApiError::NotFound(ERR_USER_NOT_FOUND.to_string())
        })
    }

    /// Overlay the fields present in `req` onto the stored user and save it.
    pub async fn update_user(&self, id: &str, req: UpdateUserRequest) -> Result<User, ApiError> {
        let existing = self.get_user(id).await?;
        let merged = existing.merge(req);
        Ok(self.repository.update(&merged).await?)
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        let existing = self.get_user(id).await?;
        Ok(self.repository.delete(&existing).await?)
    }
}
