use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // username
    pub iat: usize,
    pub exp: usize,
}

/// Signs and checks the bearer tokens handed out by `/auth/login`.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: chrono::Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
            validation: Validation::default(),
            ttl: chrono::Duration::hours(ttl_hours),
        }
    }

    pub fn issue(&self, username: &str) -> AppResult<String> {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            iat: now.timestamp() as usize,
            exp: (now + self.ttl).timestamp() as usize,
        };
        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    /// Returns the username the token was issued to, or `None` for anything
    /// this service did not sign (or that has expired).
    pub fn validate(&self, token: &str) -> Option<String> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .ok()
            .map(|data| data.claims.sub)
            .filter(|sub| !sub.is_empty())
    }
}
