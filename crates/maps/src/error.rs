/// Errors from the map provider clients.
#[derive(Debug, thiserror::Error)]
pub enum MapsError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, body decode).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A provider API key is missing or blank.
    #[error("Missing API key: {0}")]
    MissingApiKey(&'static str),
}
