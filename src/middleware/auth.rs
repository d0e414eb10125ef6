use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::errors::AppError;
use crate::services::token_service::TokenService;

/// Username resolved by the gate, available to handlers as `Extension<AuthUser>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    Allow(String),
    Deny(&'static str),
}

/// Pulls the token out of an `Authorization` value. Both `Bearer <token>`
/// and a bare token are accepted.
pub fn extract_token(header: &str) -> Option<&str> {
    let header = header.trim();
    let token = match header.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        Some(_) => return None,
        None if header.eq_ignore_ascii_case("bearer") => return None,
        None => header,
    };
    (!token.is_empty()).then_some(token)
}

pub fn authorize(headers: &HeaderMap, tokens: &TokenService) -> AuthDecision {
    let header = match headers.get(AUTHORIZATION).map(|v| v.to_str()) {
        Some(Ok(value)) => value,
        Some(Err(_)) => return AuthDecision::Deny("authorization header is not valid text"),
        None => return AuthDecision::Deny("missing authorization header"),
    };

    let Some(token) = extract_token(header) else {
        return AuthDecision::Deny("malformed authorization header");
    };

    match tokens.validate(token) {
        Some(username) => AuthDecision::Allow(username),
        None => AuthDecision::Deny("invalid token"),
    }
}

/// Middleware for `middleware::from_fn_with_state`. Runs before any
/// extractor of the wrapped handler, so a denied request never learns
/// whether the target resource exists.
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    match authorize(req.headers(), &tokens) {
        AuthDecision::Allow(username) => {
            req.extensions_mut().insert(AuthUser(username));
            Ok(next.run(req).await)
        }
        AuthDecision::Deny(reason) => {
            tracing::warn!(method = %req.method(), uri = %req.uri(), reason, "request denied");
            Err(AppError::Forbidden(reason.to_string()))
        }
    }
}
