//! In-memory user store.
//!
//! Keeps documents in insertion order behind an async lock. Used by the test
//! suites and by `STORAGE_BACKEND=memory`; data does not survive a restart.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::User;
use crate::repositories::{RepositoryError, UserStore};

#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert_one(&self, user: &User) -> Result<ObjectId, RepositoryError> {
        let id = ObjectId::new();
        self.users.write().await.push(user.clone().with_id(id));
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.users.read().await.clone())
    }

    async fn find_one(&self, id: ObjectId) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.id == Some(id))
            .cloned())
    }

    async fn replace_one(&self, id: ObjectId, user: &User) -> Result<u64, RepositoryError> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.id == Some(id)) {
            Some(stored) => {
                *stored = user.clone().with_id(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_one(&self, id: ObjectId) -> Result<u64, RepositoryError> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != Some(id));
        Ok((before - users.len()) as u64)
    }

    async fn delete_many(&self) -> Result<u64, RepositoryError> {
        let mut users = self.users.write().await;
        let deleted = users.len() as u64;
        users.clear();
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_distinct_ids() {
        let store = InMemoryUserStore::new();
        let user = User::new("Maria", "maria@example.com", "654321");

        let first = store.insert_one(&user).await.unwrap();
        let second = store.insert_one(&user).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let store = InMemoryUserStore::new();
        store
            .insert_one(&User::new("Maria", "maria@example.com", "654321"))
            .await
            .unwrap();
        store
            .insert_one(&User::new("Pedro", "pedro@example.com", "987654"))
            .await
            .unwrap();

        let names: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, vec!["Maria", "Pedro"]);
    }

    #[tokio::test]
    async fn test_replace_and_delete_report_match_counts() {
        let store = InMemoryUserStore::new();
        let id = store
            .insert_one(&User::new("Ana", "ana@example.com", "abcdef"))
            .await
            .unwrap();
        let missing = ObjectId::new();
        let renamed = User::new("Ana Maria", "ana@example.com", "abcdef");

        assert_eq!(store.replace_one(missing, &renamed).await.unwrap(), 0);
        assert_eq!(store.replace_one(id, &renamed).await.unwrap(), 1);
        assert_eq!(
            store.find_one(id).await.unwrap().map(|u| u.name),
            Some("Ana Maria".to_string())
        );

        assert_eq!(store.delete_one(missing).await.unwrap(), 0);
        assert_eq!(store.delete_one(id).await.unwrap(), 1);
        assert!(store.is_empty().await);
    }
}
