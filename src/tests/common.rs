use axum::{
    body::{to_bytes, Body},
    http::{self, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::{Arc, OnceLock};
use tower::ServiceExt;

use crate::{
    config::Config,
    models::{score::ScoreRecord, user::User},
    routes,
    services::token_service::TokenService,
    store::{CredentialStore, MemoryStore},
    utils::hash_password,
};

/// Header value of a token nobody issued.
pub const FAKE_TOKEN: &str = "Bearer VERY.GOOD.REAL.TOKEN";

/// Every fixture user's password is their username.
pub const USERS: [&str; 5] = ["nplatton", "jalexxx", "gi-ba-bu", "tmarsh", "kbrown"];

pub const SCORES: [(&str, &str, i64); 6] = [
    ("jalexxx", "movies", 18),
    ("jalexxx", "physics", 12),
    ("nplatton", "movies", 25),
    ("nplatton", "geography", 20),
    ("gi-ba-bu", "animals", 23),
    ("tmarsh", "geography", 14),
];

pub struct TestContext {
    pub app: Router,
    pub store: Arc<MemoryStore>,
    pub config: Arc<Config>,
}

impl TestContext {
    /// A token as `/auth/login` would hand it out, without paying for a hash check.
    pub fn token_for(&self, username: &str) -> String {
        TokenService::new(&self.config.jwt_secret, self.config.token_ttl_hours)
            .issue(username)
            .expect("token should be issued")
    }
}

pub fn test_config() -> Config {
    Config {
        mongodb_uri: None,
        mongodb_db: "scoreboard_test".to_string(),
        jwt_secret: "test_secret".to_string(),
        port: 8001,
        token_ttl_hours: 24,
    }
}

// Argon2 is slow in debug builds; hash the fixture passwords once per run.
fn fixture_users() -> &'static Vec<User> {
    static USERS_WITH_HASHES: OnceLock<Vec<User>> = OnceLock::new();
    USERS_WITH_HASHES.get_or_init(|| {
        USERS
            .iter()
            .map(|name| User {
                username: name.to_string(),
                password_hash: hash_password(name).expect("fixture password should hash"),
            })
            .collect()
    })
}

pub async fn seed(store: &MemoryStore) {
    for user in fixture_users() {
        store
            .insert_user(user.clone())
            .await
            .expect("Failed to insert fixture user");
    }
    for (username, category, score) in SCORES {
        store
            .upsert_score(ScoreRecord::new(username, category, score))
            .await
            .expect("Failed to insert fixture score");
    }
}

/// Fresh app over a freshly seeded in-memory store.
pub async fn setup() -> TestContext {
    let config = Arc::new(test_config());
    let store = Arc::new(MemoryStore::new());
    seed(&store).await;

    let app = routes::init_routes(store.clone(), config.clone());

    TestContext { app, store, config }
}

/// Helper to create a JSON body for requests.
pub fn json_body(json: &Value) -> Body {
    Body::from(json.to_string())
}

pub fn get(uri: &str, authorization: Option<&str>) -> Request<Body> {
    request(http::Method::GET, uri, authorization, Body::empty())
}

pub fn delete(uri: &str, authorization: Option<&str>) -> Request<Body> {
    request(http::Method::DELETE, uri, authorization, Body::empty())
}

pub fn post_json(uri: &str, json: &Value, authorization: Option<&str>) -> Request<Body> {
    request(http::Method::POST, uri, authorization, json_body(json))
}

fn request(method: http::Method, uri: &str, authorization: Option<&str>, body: Body) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .header(http::header::ACCEPT, "application/json");
    if let Some(value) = authorization {
        builder = builder.header(http::header::AUTHORIZATION, value);
    }
    builder.body(body).unwrap()
}

/// Runs the request and returns the status with the body parsed as JSON
/// (`Value::Null` for an empty body).
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()))
    };
    (status, value)
}
