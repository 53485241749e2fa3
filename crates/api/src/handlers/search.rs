//! Handlers for the restaurant search page.
//!
//! A submission runs validate -> record -> geocode -> nearby lookup -> render.
//! The search is logged before any provider call, so every accepted
//! submission is recorded exactly once whatever the lookups return.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use dinefind_core::error::CoreError;
use dinefind_core::search::validate_place_name;
use dinefind_db::repositories::SearchEventRepo;
use dinefind_maps::PlaceResult;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::ClientAddress;
use crate::state::AppState;
use crate::views::SearchPage;

/// Form body of `POST /`.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    pub city: Option<String>,
}

/// GET /
///
/// Render the empty search form. Touches neither the store nor the providers.
pub async fn search_form() -> Json<SearchPage> {
    Json(SearchPage::default())
}

/// POST /
///
/// Validate the submitted city, log the search, then look up nearby
/// restaurants. Returns 400 with the form's error state when the city is
/// missing (including bodies that are not a urlencoded form), and fails the
/// request if the search cannot be logged.
pub async fn submit_search(
    State(state): State<AppState>,
    ClientAddress(ip_address): ClientAddress,
    form: Result<Form<SearchForm>, FormRejection>,
) -> AppResult<Response> {
    let city = match &form {
        Ok(Form(form)) => form.city.as_deref(),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable search form");
            None
        }
    };

    let city = match validate_place_name(city) {
        Ok(city) => city,
        Err(CoreError::Validation(message)) => {
            return Ok((StatusCode::BAD_REQUEST, Json(SearchPage::invalid(message))).into_response());
        }
        Err(other) => return Err(other.into()),
    };

    {
        let mut conn = state.pool.acquire().await?;
        let event = SearchEventRepo::record(&mut conn, ip_address.as_deref(), city).await?;
        tracing::info!(
            event_id = event.id,
            city = %event.city,
            ip_address = ?event.ip_address,
            "Search recorded",
        );
    }

    let restaurants = find_restaurants(&state, city).await;

    Ok(Json(SearchPage::results(city, restaurants)).into_response())
}

/// Geocode `city` and list restaurants around it.
///
/// Provider failures degrade to an empty list.
async fn find_restaurants(state: &AppState, city: &str) -> Vec<PlaceResult> {
    let coordinate = match state.geocoder.geocode(city).await {
        Ok(Some(coordinate)) => coordinate,
        Ok(None) => {
            tracing::debug!(city, "No coordinate for city");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(city, error = %e, "Geocoding failed, rendering without results");
            return Vec::new();
        }
    };

    match state.places.nearby_restaurants(Some(coordinate)).await {
        Ok(restaurants) => restaurants,
        Err(e) => {
            tracing::warn!(city, error = %e, "Nearby search failed, rendering without results");
            Vec::new()
        }
    }
}
