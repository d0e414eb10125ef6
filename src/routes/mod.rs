use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::{
    config::Config,
    services::{
        leaderboard_service::LeaderboardService, score_service::ScoreService,
        token_service::TokenService, user_service::UserService,
    },
    store::CredentialStore,
};

pub mod auth;
pub mod score;
pub mod user;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check OK")
    )
)]
pub async fn health_check() -> &'static str {
    "OK"
}

pub fn init_routes(store: Arc<dyn CredentialStore>, config: Arc<Config>) -> Router {
    let token_service = Arc::new(TokenService::new(&config.jwt_secret, config.token_ttl_hours));
    let leaderboard_service = Arc::new(LeaderboardService::new(store.clone()));

    let user_service = Arc::new(UserService::new(store.clone(), token_service.clone()));
    let score_service = Arc::new(ScoreService::new(store, leaderboard_service));

    Router::new()
        .route("/health", get(health_check))
        .merge(auth::auth_routes(user_service.clone()))
        .merge(user::user_routes(user_service, token_service.clone()))
        .merge(score::score_routes(score_service, token_service))
        .layer(TraceLayer::new_for_http())
}
