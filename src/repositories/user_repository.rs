//! User repository: CRUD over the users collection.
//!
//! Identifiers arrive from clients as strings and are normalized to
//! `ObjectId` here. A string that is not a valid ObjectId simply matches
//! nothing.

use log::{debug, info};
use mongodb::bson::oid::ObjectId;
use mongodb::Database;
use std::sync::Arc;

use crate::models::User;
use crate::repositories::{MongoUserStore, RepositoryError, UserStore};

/// Repository for user-related database operations.
#[derive(Clone)]
pub struct UserRepository {
    store: Arc<dyn UserStore>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Repository over the `users` collection of a MongoDB database.
    pub fn mongo(db: &Database) -> Self {
        Self::new(Arc::new(MongoUserStore::new(db)))
    }

    /// Insert a new user and return it with its assigned identifier.
    pub async fn create(&self, user: User) -> Result<User, RepositoryError> {
        let id = self.store.insert_one(&user).await?;
        info!("Repository: Created user {}", id);
        Ok(user.with_id(id))
    }

    pub async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        self.store.find_all().await
    }

    /// Find a user by the string form of its identifier.
    ///
    /// Returns `Ok(None)` for unknown and for malformed identifiers alike.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, RepositoryError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            debug!("Repository: Malformed user id {:?}, treating as not found", id);
            return Ok(None);
        };

        debug!("Repository: Finding user by ID: {}", object_id);
        self.store.find_one(object_id).await
    }

    /// Replace the stored user matching `user.id` with `user`.
    pub async fn update(&self, user: &User) -> Result<User, RepositoryError> {
        let id = user.id.ok_or(RepositoryError::InvalidUser)?;

        if self.store.replace_one(id, user).await? == 0 {
            return Err(RepositoryError::NotFound);
        }

        debug!("Repository: Updated user {}", id);
        Ok(user.clone())
    }

    /// Delete the stored user matching `user.id`.
    pub async fn delete(&self, user: &User) -> Result<(), RepositoryError> {
        let id = user.id.ok_or(RepositoryError::InvalidUser)?;

        if self.store.delete_one(id).await? == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("Repository: Deleted user {}", id);
        Ok(())
    }

    /// Remove every user. Not exposed over HTTP.
    pub async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let deleted = self.store.delete_many().await?;
        info!("Repository: Deleted all users ({} removed)", deleted);
        Ok(deleted)
    }
}
