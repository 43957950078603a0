//! MongoDB client setup.

use log::info;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use crate::config::Config;

const APP_NAME: &str = "user-crud-api";

/// Build the process-wide client and return a handle to the configured
/// database.
///
/// The client owns a connection pool; requests check connections out per
/// operation and the pool takes them back when the operation ends, whether it
/// succeeded or not. Fails if the server does not answer a `ping`.
pub async fn connect(config: &Config) -> mongodb::error::Result<Database> {
    info!("Connecting to MongoDB...");

    let mut options = ClientOptions::parse(config.mongodb_uri.as_str()).await?;
    options.app_name = Some(APP_NAME.to_string());
    options.max_pool_size = Some(config.mongodb_max_pool_size);

    let client = Client::with_options(options)?;
    let db = client.database(&config.database_name);

    db.run_command(doc! { "ping": 1 }).await?;
    info!(
        "Connected to MongoDB database '{}' (max pool size {})",
        config.database_name, config.mongodb_max_pool_size
    );

    Ok(db)
}
