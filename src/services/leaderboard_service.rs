use std::collections::BTreeMap;
use std::sync::Arc;

use crate::errors::AppResult;
use crate::models::score::ScoreRecord;
use crate::store::CredentialStore;

pub struct LeaderboardService {
    store: Arc<dyn CredentialStore>,
}

impl LeaderboardService {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    pub async fn get_leaderboard(&self) -> AppResult<Vec<ScoreRecord>> {
        let records = self.store.list_scores().await?;
        Ok(top_per_category(records))
    }
}

/// Keeps the best record of every category. Ties go to the alphabetically
/// first username; the board is sorted by score, highest first, then by
/// category name.
pub fn top_per_category(records: impl IntoIterator<Item = ScoreRecord>) -> Vec<ScoreRecord> {
    let mut best: BTreeMap<String, ScoreRecord> = BTreeMap::new();

    for record in records {
        let replace = match best.get(&record.category) {
            Some(current) => {
                record.score > current.score
                    || (record.score == current.score && record.username < current.username)
            }
            None => true,
        };
        if replace {
            best.insert(record.category.clone(), record);
        }
    }

    let mut board: Vec<ScoreRecord> = best.into_values().collect();
    board.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.category.cmp(&b.category)));
    board
}
