//! Geocoding client.
//!
//! Wraps the provider's `/maps/api/geocode/json` endpoint: a free-text
//! address goes in, the first candidate's location comes out.

use async_trait::async_trait;
use dinefind_core::search::Coordinate;
use serde::Deserialize;

use crate::config::MapsConfig;
use crate::error::MapsError;
use crate::Geocoder;

const GEOCODE_PATH: &str = "/maps/api/geocode/json";

/// Provider status for a response carrying at least one match.
const STATUS_OK: &str = "OK";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    results: Vec<GeocodeMatch>,
}

#[derive(Debug, Deserialize)]
struct GeocodeMatch {
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Option<Location>,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: Option<f64>,
    lng: Option<f64>,
}

impl GeocodeResponse {
    /// The first match's coordinate, if the provider reported success.
    fn first_coordinate(&self) -> Option<Coordinate> {
        if self.status != STATUS_OK {
            return None;
        }
        let location = self.results.first()?.geometry.as_ref()?.location.as_ref()?;
        Coordinate::from_parts(location.lat, location.lng)
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP geocoding client.
pub struct GoogleGeocoder {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GoogleGeocoder {
    /// Create a client reusing an existing [`reqwest::Client`].
    ///
    /// Fails with [`MapsError::MissingApiKey`] if the configured key is blank.
    pub fn new(client: reqwest::Client, config: &MapsConfig) -> Result<Self, MapsError> {
        if config.geocoding_api_key.trim().is_empty() {
            return Err(MapsError::MissingApiKey("geocoding"));
        }
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.geocoding_api_key.clone(),
        })
    }
}

#[async_trait]
impl Geocoder for GoogleGeocoder {
    async fn geocode(&self, place_name: &str) -> Result<Option<Coordinate>, MapsError> {
        let response = self
            .client
            .get(format!("{}{GEOCODE_PATH}", self.base_url))
            .query(&[("address", place_name), ("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), place_name, "Geocoding returned non-success status");
            return Ok(None);
        }

        let body: GeocodeResponse = response.json().await?;
        let coordinate = body.first_coordinate();
        if coordinate.is_none() {
            tracing::debug!(provider_status = %body.status, place_name, "No geocoding match");
        }
        Ok(coordinate)
    }
}
