use dinefind_core::error::CoreError;
use dinefind_maps::MapsConfig;

/// Server configuration loaded from environment variables.
///
/// Everything except the provider API keys has a default suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite database URL (default: `sqlite://search_queries.db`).
    pub database_url: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Map provider endpoint, keys and outbound timeout.
    pub maps: MapsConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                      |
    /// |------------------------|------------------------------|
    /// | `HOST`                 | `0.0.0.0`                    |
    /// | `PORT`                 | `3000`                       |
    /// | `DATABASE_URL`         | `sqlite://search_queries.db` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                         |
    ///
    /// Provider settings are documented on [`MapsConfig::from_env`]. Missing
    /// API keys, malformed numbers, or a request timeout not above twice the
    /// provider timeout yield [`CoreError::Configuration`].
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 3000u16)?;
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://search_queries.db".into());
        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?;
        let maps = MapsConfig::from_lookup(&lookup)?;

        // Both sequential provider calls must time out before the request does.
        if maps.request_timeout_secs.saturating_mul(2) >= request_timeout_secs {
            return Err(CoreError::Configuration(format!(
                "REQUEST_TIMEOUT_SECS ({request_timeout_secs}) must exceed twice \
                 MAPS_REQUEST_TIMEOUT_SECS ({})",
                maps.request_timeout_secs
            )));
        }

        Ok(Self {
            host,
            port,
            database_url,
            request_timeout_secs,
            maps,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, CoreError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| {
            CoreError::Configuration(format!("{key} must be a valid number, got '{raw}'"))
        }),
        None => Ok(default),
    }
}
