use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What clients see of a user; the hash never leaves the service.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        UserResponse { username: u.username }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub username: String,
    pub password_hash: String,
}
