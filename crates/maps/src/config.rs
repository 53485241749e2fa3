use std::time::Duration;

use dinefind_core::error::CoreError;

use crate::error::MapsError;

/// Default provider endpoint.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";
/// Default outbound request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Configuration shared by the geocoding and places clients.
#[derive(Debug, Clone)]
pub struct MapsConfig {
    /// Scheme and host of the provider, without a trailing slash.
    pub base_url: String,
    /// API key sent with geocoding requests.
    pub geocoding_api_key: String,
    /// API key sent with nearby-search requests.
    pub places_api_key: String,
    /// Upper bound on a single outbound request, in seconds.
    pub request_timeout_secs: u64,
}

impl MapsConfig {
    /// Load provider configuration from environment variables.
    ///
    /// | Env Var                     | Required | Default                       |
    /// |-----------------------------|----------|-------------------------------|
    /// | `GOOGLE_GEOCODING_API_KEY`  | **yes**  | --                            |
    /// | `GOOGLE_PLACES_API_KEY`     | **yes**  | --                            |
    /// | `MAPS_API_BASE_URL`         | no       | `https://maps.googleapis.com` |
    /// | `MAPS_REQUEST_TIMEOUT_SECS` | no       | `10`                          |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| CoreError::Configuration(format!("{key} must be set")))
        };

        let geocoding_api_key = required("GOOGLE_GEOCODING_API_KEY")?;
        let places_api_key = required("GOOGLE_PLACES_API_KEY")?;

        let base_url = lookup("MAPS_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        let request_timeout_secs = match lookup("MAPS_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|_| {
                CoreError::Configuration(format!(
                    "MAPS_REQUEST_TIMEOUT_SECS must be a valid u64, got '{raw}'"
                ))
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            geocoding_api_key,
            places_api_key,
            request_timeout_secs,
        })
    }

    /// Build the HTTP client shared by both provider clients.
    pub fn http_client(&self) -> Result<reqwest::Client, MapsError> {
        Ok(reqwest::Client::builder()
            .timeout(Duration::from_secs(self.request_timeout_secs))
            .build()?)
    }
}
