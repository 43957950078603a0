//! Repository layer for database operations.
//!
//! `UserRepository` holds the user rules (identifier normalization, the
//! "invalid user" check) on top of a `UserStore`, the raw collection
//! operations. MongoDB and in-memory stores are provided.

pub mod error;
pub mod memory_store;
pub mod mongo_store;
pub mod store;
pub mod user_repository;

pub use error::RepositoryError;
pub use memory_store::InMemoryUserStore;
pub use mongo_store::MongoUserStore;
pub use store::UserStore;
pub use user_repository::UserRepository;
