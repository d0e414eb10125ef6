use axum::{extract::{Path, State}, middleware, routing::get, Json, Router};
use std::sync::Arc;

use crate::errors::AppResult;
use crate::middleware::auth::auth_middleware;
use crate::models::user::UserResponse;
use crate::services::{token_service::TokenService, user_service::UserService};

#[utoipa::path(
    get,
    path = "/users",
    operation_id = "list_users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 403, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn index(State(user_service): State<Arc<UserService>>) -> AppResult<Json<Vec<UserResponse>>> {
    user_service.list_users().await.map(Json)
}

#[utoipa::path(
    get,
    path = "/users/{username}",
    operation_id = "get_user",
    params(
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 403, description = "Missing or invalid token"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn find_by_username(
    State(user_service): State<Arc<UserService>>,
    Path(username): Path<String>,
) -> AppResult<Json<UserResponse>> {
    user_service.get_user(&username).await.map(Json)
}

pub fn user_routes(user_service: Arc<UserService>, tokens: Arc<TokenService>) -> Router {
    Router::new()
        .route("/users", get(index))
        .route("/users/{username}", get(find_by_username))
        .route_layer(middleware::from_fn_with_state(tokens, auth_middleware))
        .with_state(user_service)
}
