use async_trait::async_trait;

use crate::errors::AppResult;
use crate::models::{
    score::{ScoreRecord, Upsert},
    user::User,
};

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Persistence for users and their score records.
///
/// Listings come back ordered by username, then category.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Fails with `AppError::Conflict` when the username is taken.
    async fn insert_user(&self, user: User) -> AppResult<()>;

    async fn find_user(&self, username: &str) -> AppResult<Option<User>>;

    async fn list_users(&self) -> AppResult<Vec<User>>;

    async fn list_scores(&self) -> AppResult<Vec<ScoreRecord>>;

    async fn scores_by_username(&self, username: &str) -> AppResult<Vec<ScoreRecord>>;

    async fn scores_by_category(&self, category: &str) -> AppResult<Vec<ScoreRecord>>;

    async fn find_score(&self, username: &str, category: &str) -> AppResult<Option<ScoreRecord>>;

    /// Inserts or replaces the record for `(record.username, record.category)`.
    async fn upsert_score(&self, record: ScoreRecord) -> AppResult<Upsert>;

    /// Returns how many records were removed.
    async fn delete_scores_by_username(&self, username: &str) -> AppResult<u64>;
}
