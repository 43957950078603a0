//! User handlers for the CRUD endpoints.

use actix_web::{web, HttpResponse};
use log::{debug, info};

use crate::constants::HEADER_TOTAL_COUNT;
use crate::errors::ApiError;
use crate::models::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::services::UserService;

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of users", body = [UserResponse],
            headers(("X-Total-Count" = u64, description = "Number of users returned")))
    )
)]
pub async fn get_users(user_service: web::Data<UserService>) -> Result<HttpResponse, ApiError> {
    let users: Vec<UserResponse> = user_service
        .list_users()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(HttpResponse::Ok()
        .insert_header((HEADER_TOTAL_COUNT, users.len().to_string()))
        .json(users))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Malformed JSON body", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let user = user_service.create_user(body.into_inner()).await?;
    let user_response = UserResponse::from(user);

    info!("Created user: {}", user_response.id);
    Ok(HttpResponse::Created().json(user_response))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    debug!("Fetching user with id: {}", user_id);

    let user = user_service.get_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Update a user
///
/// Fields present in the body replace the stored ones; the rest are kept.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Malformed JSON body", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
    body: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    debug!("Updating user with id: {}", user_id);

    let user = user_service
        .update_user(&user_id, body.into_inner())
        .await?;

    info!("Successfully updated user: {}", user_id);
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    debug!("Deleting user with id: {}", user_id);

    user_service.delete_user(&user_id).await?;

    info!("Successfully deleted user: {}", user_id);
    Ok(HttpResponse::NoContent().finish())
}
