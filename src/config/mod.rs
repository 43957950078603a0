use std::env;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

/// Where user documents are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    MongoDb,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(StorageBackend::MongoDb),
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            other => Err(format!(
                "unknown storage backend '{}', expected 'mongodb' or 'memory'",
                other
            )),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::MongoDb => write!(f, "mongodb"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub mongodb_uri: String,
    pub database_name: String,
    pub mongodb_max_pool_size: u32,
    pub storage_backend: StorageBackend,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a valid number"),
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://127.0.0.1:27017".to_string()),
            database_name: env::var("DATABASE_NAME").unwrap_or_else(|_| "app_db".to_string()),
            mongodb_max_pool_size: env::var("MONGODB_MAX_POOL_SIZE")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("MONGODB_MAX_POOL_SIZE must be a valid number"),
            storage_backend: env::var("STORAGE_BACKEND")
                .unwrap_or_else(|_| "mongodb".to_string())
                .parse()
                .unwrap_or_else(|e: String| panic!("STORAGE_BACKEND: {}", e)),
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
