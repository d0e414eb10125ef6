use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::get,
    Extension, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::errors::AppResult;
use crate::middleware::auth::{auth_middleware, AuthUser};
use crate::models::score::{ScoreRecord, Upsert};
use crate::services::{score_service::ScoreService, token_service::TokenService};

#[derive(Deserialize, ToSchema)]
pub struct SubmitScoreRequest {
    category: String,
    score: i64,
}

#[utoipa::path(
    get,
    path = "/scores",
    operation_id = "list_scores",
    responses(
        (status = 200, description = "All score records", body = [ScoreRecord]),
        (status = 403, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn index(State(score_service): State<Arc<ScoreService>>) -> AppResult<Json<Vec<ScoreRecord>>> {
    score_service.index().await.map(Json)
}

#[utoipa::path(
    post,
    path = "/scores",
    request_body = SubmitScoreRequest,
    responses(
        (status = 201, description = "Score recorded for a new category", body = ScoreRecord),
        (status = 200, description = "Existing score replaced", body = ScoreRecord),
        (status = 400, description = "Empty category"),
        (status = 403, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn submit(
    State(score_service): State<Arc<ScoreService>>,
    Extension(AuthUser(username)): Extension<AuthUser>,
    Json(req): Json<SubmitScoreRequest>,
) -> AppResult<(StatusCode, Json<ScoreRecord>)> {
    let (record, outcome) = score_service.submit(&username, req.category, req.score).await?;
    let status = match outcome {
        Upsert::Created => StatusCode::CREATED,
        Upsert::Updated => StatusCode::OK,
    };
    Ok((status, Json(record)))
}

#[utoipa::path(
    get,
    path = "/scores/username/{username}",
    operation_id = "scores_by_username",
    params(
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 200, description = "Every score of the user", body = [ScoreRecord]),
        (status = 403, description = "Missing or invalid token"),
        (status = 404, description = "User has no scores")
    ),
    security(("bearer_auth" = []))
)]
pub async fn find_by_username(
    State(score_service): State<Arc<ScoreService>>,
    Path(username): Path<String>,
) -> AppResult<Json<Vec<ScoreRecord>>> {
    score_service.find_by_username(&username).await.map(Json)
}

#[utoipa::path(
    get,
    path = "/scores/cat/{category}",
    params(
        ("category" = String, Path, description = "Category")
    ),
    responses(
        (status = 200, description = "Every score in the category", body = [ScoreRecord]),
        (status = 403, description = "Missing or invalid token"),
        (status = 404, description = "Category has no scores")
    ),
    security(("bearer_auth" = []))
)]
pub async fn find_by_category(
    State(score_service): State<Arc<ScoreService>>,
    Path(category): Path<String>,
) -> AppResult<Json<Vec<ScoreRecord>>> {
    score_service.find_by_category(&category).await.map(Json)
}

#[utoipa::path(
    get,
    path = "/scores/username/{username}/cat/{category}",
    params(
        ("username" = String, Path, description = "Username"),
        ("category" = String, Path, description = "Category")
    ),
    responses(
        (status = 200, description = "The user's score in the category", body = ScoreRecord),
        (status = 403, description = "Missing or invalid token"),
        (status = 404, description = "No score for this pair")
    ),
    security(("bearer_auth" = []))
)]
pub async fn find_by_username_and_category(
    State(score_service): State<Arc<ScoreService>>,
    Path((username, category)): Path<(String, String)>,
) -> AppResult<Json<ScoreRecord>> {
    score_service
        .find_by_username_and_category(&username, &category)
        .await
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/scores/username/{username}",
    params(
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 204, description = "Scores removed"),
        (status = 403, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn destroy_by_username(
    State(score_service): State<Arc<ScoreService>>,
    Path(username): Path<String>,
) -> AppResult<StatusCode> {
    score_service.destroy_by_username(&username).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/scores/leadersboard",
    responses(
        (status = 200, description = "Top score of every category", body = [ScoreRecord]),
        (status = 403, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn leaders_board(State(score_service): State<Arc<ScoreService>>) -> AppResult<Json<Vec<ScoreRecord>>> {
    score_service.leaders_board().await.map(Json)
}

pub fn score_routes(score_service: Arc<ScoreService>, tokens: Arc<TokenService>) -> Router {
    Router::new()
        .route("/scores", get(index).post(submit))
        .route("/scores/leadersboard", get(leaders_board))
        .route("/scores/cat/{category}", get(find_by_category))
        .route(
            "/scores/username/{username}",
            get(find_by_username).delete(destroy_by_username),
        )
        .route(
            "/scores/username/{username}/cat/{category}",
            get(find_by_username_and_category),
        )
        .route_layer(middleware::from_fn_with_state(tokens, auth_middleware))
        .with_state(score_service)
}
