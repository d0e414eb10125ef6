#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{
        errors::AppError,
        models::{
            score::{ScoreRecord, Upsert},
            user::User,
        },
        store::{CredentialStore, MemoryStore},
    };

    fn user(name: &str) -> User {
        User {
            username: name.to_string(),
            password_hash: "not-a-real-hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_usernames_are_unique() {
        let store = MemoryStore::new();
        store.insert_user(user("nplatton")).await.unwrap();

        let err = store.insert_user(user("nplatton")).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(store.list_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_upsert_keeps_one_record_per_pair() {
        let store = MemoryStore::new();

        let first = store.upsert_score(ScoreRecord::new("jalexxx", "movies", 18)).await.unwrap();
        let second = store.upsert_score(ScoreRecord::new("jalexxx", "movies", 30)).await.unwrap();

        assert_eq!(first, Upsert::Created);
        assert_eq!(second, Upsert::Updated);
        assert_eq!(
            store.list_scores().await.unwrap(),
            vec![ScoreRecord::new("jalexxx", "movies", 30)]
        );
    }

    #[tokio::test]
    async fn test_listing_order_and_filters() {
        let store = MemoryStore::new();
        for (u, c, s) in [("b", "y", 1), ("a", "z", 2), ("a", "x", 3), ("b", "x", 4)] {
            store.upsert_score(ScoreRecord::new(u, c, s)).await.unwrap();
        }

        let all: Vec<(String, String)> = store
            .list_scores()
            .await
            .unwrap()
            .into_iter()
            .map(|r| (r.username, r.category))
            .collect();
        assert_eq!(
            all,
            vec![
                ("a".to_string(), "x".to_string()),
                ("a".to_string(), "z".to_string()),
                ("b".to_string(), "x".to_string()),
                ("b".to_string(), "y".to_string()),
            ]
        );

        assert_eq!(store.scores_by_username("a").await.unwrap().len(), 2);
        assert_eq!(store.scores_by_category("x").await.unwrap().len(), 2);
        assert_eq!(store.find_score("b", "y").await.unwrap().map(|r| r.score), Some(1));
        assert!(store.find_score("a", "y").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryStore::new();
        store.upsert_score(ScoreRecord::new("a", "x", 1)).await.unwrap();
        store.upsert_score(ScoreRecord::new("a", "y", 2)).await.unwrap();
        store.upsert_score(ScoreRecord::new("b", "x", 3)).await.unwrap();

        assert_eq!(store.delete_scores_by_username("a").await.unwrap(), 2);
        assert_eq!(store.delete_scores_by_username("a").await.unwrap(), 0);
        assert_eq!(store.list_scores().await.unwrap(), vec![ScoreRecord::new("b", "x", 3)]);
    }

    #[tokio::test]
    async fn test_concurrent_writers_on_shared_store() {
        let store: Arc<dyn CredentialStore> = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .upsert_score(ScoreRecord::new(format!("user{}", i % 4), format!("cat{}", i), i))
                        .await
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), Upsert::Created);
        }

        assert_eq!(store.list_scores().await.unwrap().len(), 16);
        assert_eq!(store.scores_by_username("user0").await.unwrap().len(), 4);
    }
}
