use crate::error::VonatError;
use crate::types::trains::Snapshot;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// Open the store, creating the database file if it does not exist yet.
/// A single connection is enough here; each phase uses it exclusively.
pub async fn connect(database_url: &str) -> Result<SqlitePool, VonatError> {
    let opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

#[derive(Clone)]
pub struct PositionStore {
    pool: SqlitePool,
}

impl PositionStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the provided DDL.
    /// (SQLite supports multi-command scripts but sqlx::query doesn't,
    /// so run the statements one by one.)
    pub async fn init_schema(&self, ddl: &str) -> Result<(), VonatError> {
        for stmt in ddl.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert one row per train in a single transaction. Returns the number
    /// of rows written.
    ///
    /// The creation time is parsed once and shared by every row. `delay`
    /// and `line` stay wire-only; the table has no columns for them.
    pub async fn insert_snapshot(&self, snapshot: &Snapshot) -> Result<u64, VonatError> {
        let timestamp = snapshot.created_at()?;

        let mut tx = self.pool.begin().await?;
        let mut inserted: u64 = 0;

        for train in &snapshot.trains.train {
            sqlx::query(
                r#"
                INSERT INTO train_position (
                    timestamp, lat, lon, relation, train_number, menetvonal, elvira_id
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(timestamp)
            .bind(train.lat)
            .bind(train.lon)
            .bind(&train.relation)
            .bind(&train.train_number)
            .bind(&train.menetvonal)
            .bind(&train.elvira_id)
            .execute(&mut *tx)
            .await?;
            inserted += 1;
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
