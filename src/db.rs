use std::sync::Arc;

use mongodb::{Client, Database};

use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{CredentialStore, MemoryStore, MongoStore};

pub async fn init_db(uri: &str, name: &str) -> AppResult<Database> {
    let client = Client::with_uri_str(uri).await?;
    Ok(client.database(name))
}

/// Picks MongoDB when a URI is configured, the in-memory store otherwise.
pub async fn init_store(config: &Config) -> AppResult<Arc<dyn CredentialStore>> {
    match config.mongodb_uri.as_deref() {
        Some(uri) => {
            let db = init_db(uri, &config.mongodb_db).await?;
            tracing::info!(database = %config.mongodb_db, "Using MongoDB store");
            Ok(Arc::new(MongoStore::new(&db).await?))
        }
        None => {
            tracing::warn!("MONGODB_URI not set, using in-memory store");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
