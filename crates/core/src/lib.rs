//! Dinefind shared domain types.
//!
//! Holds the pieces used by both the persistence layer and the HTTP layer:
//! identifier/timestamp aliases, the domain error type, place-name validation
//! and search-frequency aggregation.

pub mod error;
pub mod search;
pub mod types;
