use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, PgPool};

/// Connects the pool and pings one connection. Any failure here is fatal to
/// startup; there is no retry.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    let mut conn = pool.acquire().await?;
    conn.ping().await?;

    Ok(pool)
}
