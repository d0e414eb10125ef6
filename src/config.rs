use std::env;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct Config {
    /// `None` runs the service on the in-memory store.
    pub mongodb_uri: Option<String>,
    pub mongodb_db: String,
    pub jwt_secret: String,
    pub port: u16,
    pub token_ttl_hours: i64,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        let mongodb_uri = env::var("MONGODB_URI").ok().filter(|uri| !uri.trim().is_empty());
        let mongodb_db = env::var("MONGODB_DB").unwrap_or_else(|_| "scoreboard_db".to_string());
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| AppError::Config("JWT_SECRET must be set".to_string()))?;
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {}", e)))?;
        let token_ttl_hours = env::var("TOKEN_TTL_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid TOKEN_TTL_HOURS: {}", e)))?;

        if token_ttl_hours <= 0 {
            return Err(AppError::Config("TOKEN_TTL_HOURS must be positive".to_string()));
        }

        Ok(Config {
            mongodb_uri,
            mongodb_db,
            jwt_secret,
            port,
            token_ttl_hours,
        })
    }
}
