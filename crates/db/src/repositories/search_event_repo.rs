//! Repository for the `search_queries` table.

use sqlx::SqliteConnection;

use crate::models::search_event::SearchEvent;

/// Column list for `search_queries` SELECT / RETURNING clauses.
const COLUMNS: &str = "id, ip_address, city, timestamp";

/// Provides insert and read operations for the search log.
///
/// Every method takes the caller's connection so a handler can acquire one
/// connection per request and release it when the request ends.
pub struct SearchEventRepo;

impl SearchEventRepo {
    /// Append one search event, stamped by the column default.
    ///
    /// Single-statement insert, so readers never observe a partial row.
    pub async fn record(
        conn: &mut SqliteConnection,
        ip_address: Option<&str>,
        city: &str,
    ) -> Result<SearchEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO search_queries (ip_address, city) VALUES (?, ?) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SearchEvent>(&query)
            .bind(ip_address)
            .bind(city)
            .fetch_one(conn)
            .await
    }

    /// Every logged place name, oldest first.
    ///
    /// Rows written before the `city` column existed carry `NULL` and are
    /// skipped.
    pub async fn all_place_names(conn: &mut SqliteConnection) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT city FROM search_queries WHERE city IS NOT NULL ORDER BY id ASC",
        )
        .fetch_all(conn)
        .await
    }

    /// Total number of logged events.
    pub async fn count(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM search_queries")
            .fetch_one(conn)
            .await
    }
}
