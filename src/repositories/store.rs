use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::models::User;
use crate::repositories::RepositoryError;

/// Raw operations over the users collection.
///
/// Implementations do no validation of their own; the counts returned by
/// `replace_one` and `delete_one` are the number of matched documents.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a document and return the identifier the store assigned.
    async fn insert_one(&self, user: &User) -> Result<ObjectId, RepositoryError>;

    /// All documents in storage order.
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;

    async fn find_one(&self, id: ObjectId) -> Result<Option<User>, RepositoryError>;

    async fn replace_one(&self, id: ObjectId, user: &User) -> Result<u64, RepositoryError>;

    async fn delete_one(&self, id: ObjectId) -> Result<u64, RepositoryError>;

    async fn delete_many(&self) -> Result<u64, RepositoryError>;
}
