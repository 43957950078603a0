use actix_cors::Cors;
use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};
use log::warn;
use utoipa::OpenApi;

use crate::constants::{
    ERR_INVALID_JSON, HEADER_TOTAL_COUNT, MSG_SERVER_RUNNING, MSG_STATUS_OK,
};
use crate::errors::ApiError;
use crate::handlers;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        // Health check
        .route("/health", web::get().to(health_check))
        // OpenAPI document
        .route("/api-docs/openapi.json", web::get().to(openapi_json))
        .service(
            web::scope("/users")
                .route("", web::get().to(handlers::get_users))
                .route("", web::post().to(handlers::create_user))
                .route("/{id}", web::get().to(handlers::get_user))
                .route("/{id}", web::put().to(handlers::update_user))
                .route("/{id}", web::delete().to(handlers::delete_user)),
        );
}

/// Cross-origin policy: any origin, method and header, with the total-count
/// header readable by browsers.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .expose_headers(vec![HEADER_TOTAL_COUNT])
}

/// Render body deserialization failures with the API error shape.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, req: &HttpRequest| {
        warn!("Rejected JSON body for {} {}: {}", req.method(), req.path(), err);
        ApiError::BadRequest(format!("{}: {}", ERR_INVALID_JSON, err)).into()
    })
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: MSG_STATUS_OK.to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
