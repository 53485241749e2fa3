use std::sync::Arc;

use dinefind_maps::{Geocoder, PlacesLookup};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted and everything else sits
/// behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Handlers acquire one connection per request.
    pub pool: dinefind_db::DbPool,
    /// Place name to coordinate lookup.
    pub geocoder: Arc<dyn Geocoder>,
    /// Nearby restaurant lookup.
    pub places: Arc<dyn PlacesLookup>,
}
