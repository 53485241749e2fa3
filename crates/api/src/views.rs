//! View models handed to the response renderer.
//!
//! Handlers never build markup; they return these models serialized as JSON
//! and leave presentation to whatever sits in front of the API.

use dinefind_core::search::FrequencyEntry;
use dinefind_maps::PlaceResult;
use serde::Serialize;

/// The search page: initial form, validation error, or results.
#[derive(Debug, Default, Serialize)]
pub struct SearchPage {
    /// Place name that was searched, absent on the initial form.
    pub city: Option<String>,
    /// Provider place records, forwarded unmodified. Empty when nothing was
    /// found or the lookup degraded.
    pub restaurants: Vec<PlaceResult>,
    /// User-visible validation message.
    pub error: Option<String>,
}

impl SearchPage {
    /// Page rendered after a rejected submission.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Page rendered after a recorded search.
    pub fn results(city: impl Into<String>, restaurants: Vec<PlaceResult>) -> Self {
        Self {
            city: Some(city.into()),
            restaurants,
            error: None,
        }
    }
}

/// The admin page: how often each place name has been searched.
#[derive(Debug, Serialize)]
pub struct AdminPage {
    pub query_data: Vec<FrequencyEntry>,
}
