//! Search log entity model.
//!
//! One row per submitted search. Rows are append-only: no `updated_at`, and
//! nothing in the application updates or deletes them.

use sqlx::FromRow;
use dinefind_core::types::{DbId, Timestamp};

/// A single persisted search submission.
#[derive(Debug, Clone, FromRow)]
pub struct SearchEvent {
    pub id: DbId,
    /// Network address of the requester at submission time, when known.
    pub ip_address: Option<String>,
    /// Place name exactly as submitted.
    pub city: String,
    pub timestamp: Timestamp,
}
