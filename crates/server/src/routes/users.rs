use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use service::users::{User, UserStore, UserWriteModel};
use tracing::info;
use uuid::Uuid;

use crate::errors::ApiError;

pub type SharedStore = Arc<dyn UserStore>;

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses((status = 200, description = "All users in insertion order", body = [crate::openapi::UserDoc]))
)]
pub async fn list_users(State(store): State<SharedStore>) -> Json<Vec<User>> {
    Json(store.list().await)
}

/// Get a single user by id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::UserDoc),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_user(
    State(store): State<SharedStore>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(id) = id?;
    store.get(id).await.map(Json).ok_or(ApiError::NotFound)
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = crate::openapi::UserWriteDoc,
    responses((status = 201, description = "Created", body = crate::openapi::UserDoc))
)]
pub async fn create_user(
    State(store): State<SharedStore>,
    Json(input): Json<UserWriteModel>,
) -> (StatusCode, Json<User>) {
    let user = store.create(input).await;
    info!(id = %user.id, "user created");
    (StatusCode::CREATED, Json(user))
}

/// Update an existing user; the path id wins over any id in the body
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = crate::openapi::UserWriteDoc,
    responses(
        (status = 200, description = "OK", body = crate::openapi::UserDoc),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_user(
    State(store): State<SharedStore>,
    id: Result<Path<Uuid>, PathRejection>,
    Json(input): Json<UserWriteModel>,
) -> Result<Json<User>, ApiError> {
    let Path(id) = id?;
    let user = store.update(id, input).await?;
    info!(%id, "user updated");
    Ok(Json(user))
}
