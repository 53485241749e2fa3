//! Nearby restaurant lookup client.
//!
//! Wraps the provider's `/maps/api/place/nearbysearch/json` endpoint with a
//! fixed radius and category.

use async_trait::async_trait;
use dinefind_core::search::{Coordinate, SEARCH_CATEGORY, SEARCH_RADIUS_METERS};
use serde::Deserialize;

use crate::config::MapsConfig;
use crate::error::MapsError;
use crate::{PlaceResult, PlacesLookup};

const NEARBY_SEARCH_PATH: &str = "/maps/api/place/nearbysearch/json";

#[derive(Debug, Default, Deserialize)]
struct NearbySearchResponse {
    #[serde(default)]
    results: Vec<PlaceResult>,
}

/// HTTP places client.
pub struct GooglePlaces {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GooglePlaces {
    /// Create a client reusing an existing [`reqwest::Client`].
    ///
    /// Fails with [`MapsError::MissingApiKey`] if the configured key is blank.
    pub fn new(client: reqwest::Client, config: &MapsConfig) -> Result<Self, MapsError> {
        if config.places_api_key.trim().is_empty() {
            return Err(MapsError::MissingApiKey("places"));
        }
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.places_api_key.clone(),
        })
    }
}

#[async_trait]
impl PlacesLookup for GooglePlaces {
    async fn nearby_restaurants(
        &self,
        coordinate: Option<Coordinate>,
    ) -> Result<Vec<PlaceResult>, MapsError> {
        let Some(coordinate) = coordinate else {
            return Ok(Vec::new());
        };

        let radius = SEARCH_RADIUS_METERS.to_string();
        let location = coordinate.as_query_value();
        let response = self
            .client
            .get(format!("{}{NEARBY_SEARCH_PATH}", self.base_url))
            .query(&[
                ("key", self.api_key.as_str()),
                ("location", location.as_str()),
                ("radius", radius.as_str()),
                ("type", SEARCH_CATEGORY),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), %location, "Nearby search returned non-success status");
            return Ok(Vec::new());
        }

        let body: NearbySearchResponse = response.json().await?;
        Ok(body.results)
    }
}
