//! Clients for the external map providers.
//!
//! Two lookups back a restaurant search: [`geocoding`] turns a free-text place
//! name into a [`Coordinate`], and [`places`] lists restaurants near that
//! coordinate. Both sit behind traits so the HTTP layer can be exercised
//! without network access.

pub mod config;
pub mod error;
pub mod geocoding;
pub mod places;

use async_trait::async_trait;
use dinefind_core::search::Coordinate;

pub use config::MapsConfig;
pub use error::MapsError;
pub use geocoding::GoogleGeocoder;
pub use places::GooglePlaces;

/// A place record returned by the places provider, forwarded to the view
/// without interpretation.
pub type PlaceResult = serde_json::Value;

/// Resolves a place name to a coordinate.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Returns `Ok(None)` when the provider has no match or answers with a
    /// non-success status. Only transport failures are errors.
    async fn geocode(&self, place_name: &str) -> Result<Option<Coordinate>, MapsError>;
}

/// Lists restaurants around a coordinate.
#[async_trait]
pub trait PlacesLookup: Send + Sync {
    /// Returns an empty list for `None` without contacting the provider, and
    /// for non-success provider responses. Only transport failures are errors.
    async fn nearby_restaurants(
        &self,
        coordinate: Option<Coordinate>,
    ) -> Result<Vec<PlaceResult>, MapsError>;
}
