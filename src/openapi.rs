use utoipa::OpenApi;

use crate::models::{
    CreateUserRequest, ErrorResponse, HealthResponse, UpdateUserRequest, UserResponse,
};

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        version = "0.1.0",
        description = "CRUD REST API for user records stored in MongoDB.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User CRUD endpoints")
    ),
    paths(
        crate::handlers::get_users,
        crate::handlers::create_user,
        crate::handlers::get_user,
        crate::handlers::update_user,
        crate::handlers::delete_user,
        crate::routes::health_check
    ),
    components(
        schemas(
            CreateUserRequest,
            UpdateUserRequest,
            UserResponse,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_user_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/users"));
        assert!(doc.paths.paths.contains_key("/users/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
