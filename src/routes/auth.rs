use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::errors::AppResult;
use crate::services::user_service::{LoginResponse, UserService};

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct RegisterRequest {
    username: String,
    password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub msg: String,
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Bad credentials", body = LoginResponse)
    )
)]
pub async fn login(
    State(user_service): State<Arc<UserService>>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let token = user_service.login(&req.username, &req.password).await?;

    Ok(Json(LoginResponse {
        success: true,
        token: Some(token),
    }))
}

#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Missing username or password"),
        (status = 409, description = "Username taken")
    )
)]
pub async fn register(
    State(user_service): State<Arc<UserService>>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    user_service.register(req.username, req.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            msg: "user created".to_string(),
        }),
    ))
}

pub fn auth_routes(user_service: Arc<UserService>) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .with_state(user_service)
}
