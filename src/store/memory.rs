use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::CredentialStore;
use crate::errors::{AppError, AppResult};
use crate::models::{
    score::{ScoreRecord, Upsert},
    user::User,
};

#[derive(Default)]
struct Inner {
    users: BTreeMap<String, User>,
    // keyed by (username, category) so iteration order is the listing order
    scores: BTreeMap<(String, String), ScoreRecord>,
}

/// Process-local store. Reads share the lock, writes take it exclusively.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn insert_user(&self, user: User) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        if inner.users.contains_key(&user.username) {
            return Err(AppError::Conflict(format!(
                "Username {} already in use",
                user.username
            )));
        }
        inner.users.insert(user.username.clone(), user);
        Ok(())
    }

    async fn find_user(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.inner.read().await.users.get(username).cloned())
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.inner.read().await.users.values().cloned().collect())
    }

    async fn list_scores(&self) -> AppResult<Vec<ScoreRecord>> {
        Ok(self.inner.read().await.scores.values().cloned().collect())
    }

    async fn scores_by_username(&self, username: &str) -> AppResult<Vec<ScoreRecord>> {
        let inner = self.inner.read().await;
        Ok(inner
            .scores
            .values()
            .filter(|r| r.username == username)
            .cloned()
            .collect())
    }

    async fn scores_by_category(&self, category: &str) -> AppResult<Vec<ScoreRecord>> {
        let inner = self.inner.read().await;
        Ok(inner
            .scores
            .values()
            .filter(|r| r.category == category)
            .cloned()
            .collect())
    }

    async fn find_score(&self, username: &str, category: &str) -> AppResult<Option<ScoreRecord>> {
        let key = (username.to_string(), category.to_string());
        Ok(self.inner.read().await.scores.get(&key).cloned())
    }

    async fn upsert_score(&self, record: ScoreRecord) -> AppResult<Upsert> {
        let key = (record.username.clone(), record.category.clone());
        let previous = self.inner.write().await.scores.insert(key, record);
        Ok(match previous {
            Some(_) => Upsert::Updated,
            None => Upsert::Created,
        })
    }

    async fn delete_scores_by_username(&self, username: &str) -> AppResult<u64> {
        let mut inner = self.inner.write().await;
        let before = inner.scores.len();
        inner.scores.retain(|(owner, _), _| owner != username);
        Ok((before - inner.scores.len()) as u64)
    }
}
