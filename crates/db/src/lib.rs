//! Persistence layer for the search log.
//!
//! Owns the SQLite connection pool, the `search_queries` schema and the
//! repository used by the HTTP handlers.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Connection, SqliteConnection};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Name of the single log table.
pub const SEARCH_TABLE: &str = "search_queries";

const CREATE_SEARCH_TABLE: &str = "\
    CREATE TABLE IF NOT EXISTS search_queries (\
        id INTEGER PRIMARY KEY AUTOINCREMENT, \
        ip_address TEXT, \
        city TEXT, \
        timestamp DATETIME DEFAULT CURRENT_TIMESTAMP\
    )";

/// Create a connection pool from a database URL.
///
/// The database file is created if it does not exist yet.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Create a pool over a private in-memory database.
///
/// Limited to a single connection that is never recycled, since every
/// SQLite in-memory connection would otherwise see its own empty database.
pub async fn create_in_memory_pool() -> Result<DbPool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    conn.ping().await
}

/// Make sure the `search_queries` table exists with a `city` column.
///
/// Creates the table when missing and upgrades tables from older deployments
/// that predate the `city` column by adding it in place. Existing rows are
/// kept. Safe to run any number of times.
pub async fn ensure_schema(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_SEARCH_TABLE).execute(&mut *conn).await?;

    let columns: Vec<String> =
        sqlx::query_scalar("SELECT name FROM pragma_table_info('search_queries')")
            .fetch_all(&mut *conn)
            .await?;

    if !columns.iter().any(|c| c == "city") {
        tracing::info!(table = SEARCH_TABLE, "Adding missing city column");
        sqlx::query("ALTER TABLE search_queries ADD COLUMN city TEXT")
            .execute(&mut *conn)
            .await?;
    }

    Ok(())
}
