use argon2::{self, password_hash::{PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng}, Argon2};

use crate::errors::{AppError, AppResult};

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Hashing(e.to_string()))
}

/// A hash that doesn't parse never verifies.
pub fn verify_password(hash: &str, password: &str) -> bool {
    match argon2::PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}
