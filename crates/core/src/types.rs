/// SQLite `INTEGER PRIMARY KEY` row identifiers.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
