use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

use cookshelf::models::NewCookbook;
use cookshelf::CookbookStore;

pub struct TestStore {
    pub store: CookbookStore,
    pub db: SqlitePool,
}

impl TestStore {
    pub async fn new() -> Self {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("Failed to create in-memory SQLite pool");

        let store = CookbookStore::new(pool.clone());
        store.initialize().await.expect("Failed to create schema");

        Self { store, db: pool }
    }

    /// Run a COUNT(*)-style query returning a single integer.
    pub async fn count(&self, sql: &str) -> i64 {
        let (count,): (i64,) = sqlx::query_as(sql)
            .fetch_one(&self.db)
            .await
            .expect("Count query failed");
        count
    }
}

pub fn foraged_and_found() -> NewCookbook {
    NewCookbook {
        title: "Foraged & Found".to_string(),
        author: "Oak Wavelength".to_string(),
        year_published: 2023,
        aesthetic_rating: 5,
        instagram_worthy: true,
        cover_color: "Forest Green".to_string(),
    }
}

pub fn small_batch() -> NewCookbook {
    NewCookbook {
        title: "Small Batch: 50 Recipes You Will Never Actually Make".to_string(),
        author: "Sage Moonbeam".to_string(),
        year_published: 2022,
        aesthetic_rating: 4,
        instagram_worthy: true,
        cover_color: "Raw Linen".to_string(),
    }
}
