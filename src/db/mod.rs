pub mod models;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use self::models::{NewReading, Reading};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to {op} sensor readings")]
    Query {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl StoreError {
    fn query(op: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Query { op, source }
    }
}

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Every reading, oldest first.
pub async fn fetch_all_ascending(pool: &PgPool) -> Result<Vec<Reading>, StoreError> {
    sqlx::query_as::<_, Reading>(
        r#"
        SELECT ts, room, temperature, humidity
        FROM env_data
        ORDER BY ts ASC
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(StoreError::query("fetch"))
}

/// The most recent reading, if the table has any.
pub async fn fetch_latest(pool: &PgPool) -> Result<Option<Reading>, StoreError> {
    sqlx::query_as::<_, Reading>(
        r#"
        SELECT ts, room, temperature, humidity
        FROM env_data
        ORDER BY ts DESC
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await
    .map_err(StoreError::query("fetch latest"))
}

/// Full scan with no ordering guarantee.
pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Reading>, StoreError> {
    sqlx::query_as::<_, Reading>("SELECT ts, room, temperature, humidity FROM env_data")
        .fetch_all(pool)
        .await
        .map_err(StoreError::query("scan"))
}

pub async fn insert(pool: &PgPool, reading: &NewReading) -> Result<Reading, StoreError> {
    sqlx::query_as::<_, Reading>(
        r#"
        INSERT INTO env_data (ts, room, temperature, humidity)
        VALUES (COALESCE($1::timestamptz, now()), $2, $3, $4)
        RETURNING ts, room, temperature, humidity
        "#,
    )
    .bind(reading.ts)
    .bind(&reading.room)
    .bind(reading.temperature)
    .bind(reading.humidity)
    .fetch_one(pool)
    .await
    .map_err(StoreError::query("insert"))
}
