mod error;
pub mod stores;
pub mod tables;

pub use error::DbError;

use color_eyre::eyre::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

/// Connect to the database and bring the schema up to date.
///
/// Every prepared statement sqlx caches is owned by its pooled connection,
/// so the pool is the only shared state and it is fully built here, before
/// any request is served.
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let mut pool_options = SqlitePoolOptions::new();
    if database_url.contains(":memory:") {
        // An in-memory database exists per connection; keep exactly one
        // alive for the lifetime of the pool.
        pool_options = pool_options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = pool_options.connect_with(options).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Connected to database at [{database_url}]");

    Ok(pool)
}
