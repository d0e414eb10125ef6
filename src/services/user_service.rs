use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::{AppError, AppResult};
use crate::models::user::{User, UserResponse};
use crate::services::token_service::TokenService;
use crate::store::CredentialStore;
use crate::utils::{hash_password, verify_password};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub token: Option<String>,
}

pub struct UserService {
    store: Arc<dyn CredentialStore>,
    tokens: Arc<TokenService>,
}

impl UserService {
    pub fn new(store: Arc<dyn CredentialStore>, tokens: Arc<TokenService>) -> Self {
        Self { store, tokens }
    }

    pub async fn register(&self, username: String, password: String) -> AppResult<()> {
        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(AppError::Validation("username must not be empty".to_string()));
        }
        if password.is_empty() {
            return Err(AppError::Validation("password must not be empty".to_string()));
        }

        // cheap pre-check, the store still enforces uniqueness on insert
        if self.store.find_user(&username).await?.is_some() {
            return Err(AppError::Conflict(format!("Username {} already in use", username)));
        }

        let password_hash = hash_password(&password)?;
        self.store
            .insert_user(User {
                username: username.clone(),
                password_hash,
            })
            .await?;

        tracing::info!(%username, "user registered");
        Ok(())
    }

    /// Returns a fresh token when the credentials match. Unknown users and
    /// wrong passwords are indistinguishable to the caller.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<String> {
        let user = match self.store.find_user(username.trim()).await? {
            Some(user) => user,
            None => {
                tracing::debug!(%username, "login for unknown user");
                return Err(AppError::InvalidCredentials);
            }
        };

        if !verify_password(&user.password_hash, password) {
            tracing::debug!(%username, "login with wrong password");
            return Err(AppError::InvalidCredentials);
        }

        self.tokens.issue(&user.username)
    }

    pub async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.store.list_users().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_user(&self, username: &str) -> AppResult<UserResponse> {
        self.store
            .find_user(username)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", username)))
    }
}
