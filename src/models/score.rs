use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct ScoreRecord {
    pub username: String,
    pub category: String,
    pub score: i64,
}

impl ScoreRecord {
    pub fn new(username: impl Into<String>, category: impl Into<String>, score: i64) -> Self {
        Self {
            username: username.into(),
            category: category.into(),
            score,
        }
    }
}

/// Result of writing a score: whether the (username, category) pair was new.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Created,
    Updated,
}
