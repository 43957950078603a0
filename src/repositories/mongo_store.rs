//! MongoDB-backed user store.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::debug;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use crate::constants::COLLECTION_USERS;
use crate::models::User;
use crate::repositories::{RepositoryError, UserStore};

/// Store over the `users` collection.
///
/// Holds a collection handle only; connections come from the client's pool
/// for the duration of each call.
#[derive(Clone)]
pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_USERS),
        }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn insert_one(&self, user: &User) -> Result<ObjectId, RepositoryError> {
        // The driver would generate the same kind of id client-side; doing it
        // here avoids decoding `inserted_id` back out of a Bson value.
        let id = ObjectId::new();
        let document = user.clone().with_id(id);
        self.collection.insert_one(&document).await?;
        debug!("Store: Inserted user {}", id);
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_one(&self, id: ObjectId) -> Result<Option<User>, RepositoryError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn replace_one(&self, id: ObjectId, user: &User) -> Result<u64, RepositoryError> {
        let result = self
            .collection
            .replace_one(doc! { "_id": id }, user)
            .await?;
        Ok(result.matched_count)
    }

    async fn delete_one(&self, id: ObjectId) -> Result<u64, RepositoryError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }

    async fn delete_many(&self) -> Result<u64, RepositoryError> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}
