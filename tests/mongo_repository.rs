//! Repository tests against a live MongoDB.
//!
//! Ignored by default. Run with a reachable server:
//!
//! ```text
//! MONGODB_URI=mongodb://127.0.0.1:27017 cargo test --test mongo_repository -- --ignored --test-threads=1
//! ```
//!
//! Each test wipes the `users` collection of the `app_db_test` database.

use user_crud_api::config::{Config, StorageBackend};
use user_crud_api::database;
use user_crud_api::models::User;
use user_crud_api::repositories::{RepositoryError, UserRepository};

async fn repository() -> UserRepository {
    let config = Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 8080,
        mongodb_uri: std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://127.0.0.1:27017".to_string()),
        database_name: "app_db_test".to_string(),
        mongodb_max_pool_size: 4,
        storage_backend: StorageBackend::MongoDb,
    };
    let db = database::connect(&config)
        .await
        .expect("MongoDB must be reachable for ignored tests");

    let repository = UserRepository::mongo(&db);
    repository.delete_all().await.unwrap();
    repository
}

#[tokio::test]
#[ignore]
async fn test_create_and_find_all() {
    let repository = repository().await;
    let user = User::new("João", "joao@example.com", "123456");

    let created = repository.create(user.clone()).await.unwrap();
    assert_eq!(created.name, user.name);

    let users = repository.find_all().await.unwrap();
    assert_eq!(users, vec![created]);
}

#[tokio::test]
#[ignore]
async fn test_update_then_find_by_id() {
    let repository = repository().await;
    let created = repository
        .create(User::new("Fernando", "fernando@example.com", "qwerty"))
        .await
        .unwrap();

    let changed = User {
        name: "Novo Nome".to_string(),
        email: "novoemail@example.com".to_string(),
        ..created.clone()
    };
    repository.update(&changed).await.unwrap();

    let id = created.id.unwrap().to_hex();
    assert_eq!(repository.find_by_id(&id).await.unwrap(), Some(changed));
}

#[tokio::test]
#[ignore]
async fn test_delete_then_find_by_id_is_none() {
    let repository = repository().await;
    let created = repository
        .create(User::new("Ana", "ana@example.com", "abcdef"))
        .await
        .unwrap();

    repository.delete(&created).await.unwrap();

    let id = created.id.unwrap().to_hex();
    assert_eq!(repository.find_by_id(&id).await.unwrap(), None);
    assert_eq!(repository.find_by_id("123").await.unwrap(), None);
}

#[tokio::test]
#[ignore]
async fn test_delete_without_id_is_rejected() {
    let repository = repository().await;
    repository
        .create(User::new("Carlos", "carlos@example.com", "abcdef"))
        .await
        .unwrap();

    let result = repository
        .delete(&User {
            name: "Carlos".to_string(),
            ..User::default()
        })
        .await;

    assert!(matches!(result, Err(RepositoryError::InvalidUser)));
    assert_eq!(repository.find_all().await.unwrap().len(), 1);
}
