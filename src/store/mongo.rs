use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, Database, IndexModel,
};

use super::CredentialStore;
use crate::errors::{AppError, AppResult};
use crate::models::{
    score::{ScoreRecord, Upsert},
    user::User,
};

const DUPLICATE_KEY: i32 = 11000;

pub struct MongoStore {
    users: Collection<User>,
    scores: Collection<ScoreRecord>,
}

impl MongoStore {
    /// Binds the `users` and `scores` collections and makes sure the
    /// uniqueness indexes exist.
    pub async fn new(db: &Database) -> AppResult<Self> {
        let store = Self {
            users: db.collection("users"),
            scores: db.collection("scores"),
        };

        let unique = IndexOptions::builder().unique(true).build();
        store
            .users
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "username": 1 })
                    .options(unique.clone())
                    .build(),
            )
            .await?;
        store
            .scores
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "username": 1, "category": 1 })
                    .options(unique)
                    .build(),
            )
            .await?;

        Ok(store)
    }

    async fn find_scores(&self, filter: mongodb::bson::Document) -> AppResult<Vec<ScoreRecord>> {
        let cursor = self
            .scores
            .find(filter)
            .sort(doc! { "username": 1, "category": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == DUPLICATE_KEY
    )
}

#[async_trait]
impl CredentialStore for MongoStore {
    async fn insert_user(&self, user: User) -> AppResult<()> {
        let username = user.username.clone();
        match self.users.insert_one(user).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => Err(AppError::Conflict(format!(
                "Username {} already in use",
                username
            ))),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_user(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.users.find_one(doc! { "username": username }).await?)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        let cursor = self.users.find(doc! {}).sort(doc! { "username": 1 }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn list_scores(&self) -> AppResult<Vec<ScoreRecord>> {
        self.find_scores(doc! {}).await
    }

    async fn scores_by_username(&self, username: &str) -> AppResult<Vec<ScoreRecord>> {
        self.find_scores(doc! { "username": username }).await
    }

    async fn scores_by_category(&self, category: &str) -> AppResult<Vec<ScoreRecord>> {
        self.find_scores(doc! { "category": category }).await
    }

    async fn find_score(&self, username: &str, category: &str) -> AppResult<Option<ScoreRecord>> {
        Ok(self
            .scores
            .find_one(doc! { "username": username, "category": category })
            .await?)
    }

    async fn upsert_score(&self, record: ScoreRecord) -> AppResult<Upsert> {
        let result = self
            .scores
            .update_one(
                doc! { "username": &record.username, "category": &record.category },
                doc! { "$set": { "score": record.score } },
            )
            .upsert(true)
            .await?;

        Ok(if result.upserted_id.is_some() {
            Upsert::Created
        } else {
            Upsert::Updated
        })
    }

    async fn delete_scores_by_username(&self, username: &str) -> AppResult<u64> {
        let result = self.scores.delete_many(doc! { "username": username }).await?;
        Ok(result.deleted_count)
    }
}
