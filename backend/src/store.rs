use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

pub const IN_MEMORY_URL: &str = "sqlite::memory:";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("Corrupt value for key {key:?}: {len} bytes")]
    Corrupt { key: String, len: usize },
    #[error("Counter overflow for key {0:?}")]
    Overflow(String),
}

/// Text-keyed, byte-valued store on top of a single SQLite table.
#[derive(Debug, Clone)]
pub struct KvStore {
    pool: SqlitePool,
}

impl KvStore {
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        // Every connection to `:memory:` opens its own database.
        let pool = if url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        }
        .connect_with(options)
        .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("📋 Store ready at {}", url);

        Ok(Self { pool })
    }

    pub async fn in_memory() -> Result<Self, StoreError> {
        Self::connect(IN_MEMORY_URL, 1).await
    }

    pub async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let value = sqlx::query_scalar::<_, Vec<u8>>("SELECT value FROM kv WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    pub async fn insert_if_absent(&self, key: &str, value: &[u8]) -> Result<bool, StoreError> {
        let result = sqlx::query("INSERT INTO kv (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO NOTHING")
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() == 1)
    }

    /// Reads the current value, applies `f`, and writes the result back in one
    /// transaction. Nothing is written if `f` or any statement fails.
    pub async fn update<F>(&self, key: &str, f: F) -> Result<Vec<u8>, StoreError>
    where
        F: FnOnce(Option<&[u8]>) -> Result<Vec<u8>, StoreError>,
    {
        // Take the write lock up front so concurrent writers wait on
        // busy_timeout instead of failing the read-to-write upgrade.
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let current = sqlx::query_scalar::<_, Vec<u8>>("SELECT value FROM kv WHERE key = ?1")
            .bind(key)
            .fetch_optional(&mut *tx)
            .await?;

        let next = f(current.as_deref())?;

        sqlx::query(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(&next)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        debug!("Updated key {:?}", key);

        Ok(next)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
