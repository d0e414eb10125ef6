use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::CorsLayer;
use utoipa::{openapi::{security::{HttpAuthScheme, HttpBuilder, SecurityScheme}, SecurityRequirement}, Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::Config, errors::AppResult, routes::init_routes};

mod config;
mod db;
mod errors;
mod middleware;
mod models;
mod routes;
mod services;
mod store;
mod telemetry;
mod utils;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health_check,
        routes::auth::login,
        routes::auth::register,
        routes::user::index,
        routes::user::find_by_username,
        routes::score::index,
        routes::score::submit,
        routes::score::find_by_username,
        routes::score::find_by_category,
        routes::score::find_by_username_and_category,
        routes::score::destroy_by_username,
        routes::score::leaders_board,
    ),
    components(
        schemas(
            routes::auth::LoginRequest,
            routes::auth::RegisterRequest,
            routes::auth::RegisterResponse,
            routes::score::SubmitScoreRequest,
            services::user_service::LoginResponse,
            models::user::UserResponse,
            models::score::ScoreRecord,
        ),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

/// Registers the `bearer_auth` scheme the protected paths refer to.
pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let comps = openapi.components.get_or_insert_with(Default::default);

        comps.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );

        let sr = SecurityRequirement::new::<String, Vec<String>, String>(
            "bearer_auth".to_string(),
            Vec::<String>::new(),
        );
        openapi.security = Some(vec![sr]);
    }
}

#[tokio::main]
async fn main() -> AppResult<()> {
    dotenv::dotenv().ok();
    telemetry::init_tracing("scoreboard_api");

    let config = Arc::new(Config::from_env()?);
    let store = db::init_store(&config).await?;

    let app = Router::new()
        .merge(init_routes(store, config.clone()))
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}

#[cfg(test)]
mod tests;
