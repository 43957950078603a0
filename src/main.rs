use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use user_crud_api::config::{Config, StorageBackend, CONFIG};
use user_crud_api::database;
use user_crud_api::repositories::{InMemoryUserStore, UserRepository};
use user_crud_api::routes;
use user_crud_api::services::UserService;

async fn build_repository(config: &Config) -> io::Result<UserRepository> {
    match config.storage_backend {
        StorageBackend::MongoDb => {
            let db = database::connect(config)
                .await
                .map_err(|e| io::Error::new(io::ErrorKind::ConnectionRefused, e))?;
            Ok(UserRepository::mongo(&db))
        }
        StorageBackend::Memory => {
            info!("Using in-memory storage, data will not persist");
            Ok(UserRepository::new(Arc::new(InMemoryUserStore::new())))
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let repository = build_repository(&CONFIG).await?;
    let user_service = web::Data::new(UserService::new(repository));

    let server_addr = CONFIG.server_addr();
    info!(
        "Starting server at http://{} ({} storage)",
        server_addr, CONFIG.storage_backend
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(routes::cors())
            .app_data(user_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
