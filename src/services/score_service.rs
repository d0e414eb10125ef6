use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::models::score::{ScoreRecord, Upsert};
use crate::services::leaderboard_service::LeaderboardService;
use crate::store::CredentialStore;

pub struct ScoreService {
    store: Arc<dyn CredentialStore>,
    pub leaderboard_service: Arc<LeaderboardService>,
}

impl ScoreService {
    pub fn new(store: Arc<dyn CredentialStore>, leaderboard_service: Arc<LeaderboardService>) -> Self {
        Self {
            store,
            leaderboard_service,
        }
    }

    pub async fn index(&self) -> AppResult<Vec<ScoreRecord>> {
        self.store.list_scores().await
    }

    pub async fn find_by_username(&self, username: &str) -> AppResult<Vec<ScoreRecord>> {
        let records = self.store.scores_by_username(username).await?;
        if records.is_empty() {
            return Err(AppError::NotFound(format!("No scores for user {}", username)));
        }
        Ok(records)
    }

    pub async fn find_by_category(&self, category: &str) -> AppResult<Vec<ScoreRecord>> {
        let records = self.store.scores_by_category(category).await?;
        if records.is_empty() {
            return Err(AppError::NotFound(format!("No scores for category {}", category)));
        }
        Ok(records)
    }

    pub async fn find_by_username_and_category(
        &self,
        username: &str,
        category: &str,
    ) -> AppResult<ScoreRecord> {
        self.store
            .find_score(username, category)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No {} score for user {}", category, username))
            })
    }

    /// Removing scores of a user that has none is not an error.
    pub async fn destroy_by_username(&self, username: &str) -> AppResult<u64> {
        let deleted = self.store.delete_scores_by_username(username).await?;
        tracing::info!(%username, deleted, "scores destroyed");
        Ok(deleted)
    }

    pub async fn submit(&self, username: &str, category: String, score: i64) -> AppResult<(ScoreRecord, Upsert)> {
        let category = category.trim().to_string();
        if category.is_empty() {
            return Err(AppError::Validation("category must not be empty".to_string()));
        }

        let record = ScoreRecord::new(username, category, score);
        let outcome = self.store.upsert_score(record.clone()).await?;
        tracing::info!(
            username = %record.username,
            category = %record.category,
            score,
            ?outcome,
            "score submitted"
        );
        Ok((record, outcome))
    }

    pub async fn leaders_board(&self) -> AppResult<Vec<ScoreRecord>> {
        self.leaderboard_service.get_leaderboard().await
    }
}
