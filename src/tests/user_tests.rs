#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::{models::user::UserResponse, services::token_service::TokenService};

    use super::super::common::{get, send, setup, FAKE_TOKEN, USERS};

    #[tokio::test]
    async fn test_index_returns_all_users() {
        let ctx = setup().await;
        let token = ctx.token_for("nplatton");

        let (status, body) = send(&ctx.app, get("/users", Some(&token))).await;

        assert_eq!(status, StatusCode::OK);
        let users = body.as_array().unwrap();
        assert_eq!(users.len(), USERS.len());
        assert!(users.iter().all(|u| u.get("password_hash").is_none()));

        let users: Vec<UserResponse> = serde_json::from_value(body).unwrap();
        let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["gi-ba-bu", "jalexxx", "kbrown", "nplatton", "tmarsh"]);
    }

    #[tokio::test]
    async fn test_index_rejects_bad_token() {
        let ctx = setup().await;

        let (status, _) = send(&ctx.app, get("/users", Some(FAKE_TOKEN))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = send(&ctx.app, get("/users", None)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_find_by_username() {
        let ctx = setup().await;
        let token = ctx.token_for("nplatton");

        let (status, body) = send(&ctx.app, get("/users/jalexxx", Some(&token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "jalexxx");

        let (status, _) = send(&ctx.app, get("/users/tester", Some(&token))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_find_by_username_checks_auth_before_existence() {
        let ctx = setup().await;

        let (status, _) = send(&ctx.app, get("/users/jalexxx", Some(FAKE_TOKEN))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = send(&ctx.app, get("/users/tester", Some(FAKE_TOKEN))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_expired_or_foreign_token_is_forbidden() {
        let ctx = setup().await;

        let expired = TokenService::new(&ctx.config.jwt_secret, -2).issue("nplatton").unwrap();
        let (status, _) = send(&ctx.app, get("/users", Some(&expired))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let foreign = TokenService::new("someone_elses_secret", 24).issue("nplatton").unwrap();
        let (status, _) = send(&ctx.app, get("/users", Some(&foreign))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let ctx = setup().await;

        let (status, body) = send(&ctx.app, get("/health", None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }
}
