//! Client configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Errors raised while building a [`ClientConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The service URL is not an absolute http(s) URL.
    #[error("invalid API URL '{0}' (expected http:// or https://)")]
    InvalidApiUrl(String),

    /// A numeric setting could not be parsed or was out of range.
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service base URL without a trailing slash.
    pub api_url: String,
    /// Per-request timeout applied by the native transport.
    pub request_timeout_secs: u64,
    /// Number of players created by one generate action.
    pub batch_size: usize,
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `LEADERBOARD_API_URL`: default `http://127.0.0.1:5000`
    /// - `LEADERBOARD_REQUEST_TIMEOUT_SECS`: default 10
    /// - `LEADERBOARD_BATCH_SIZE`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not http(s) or a number fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = std::env::var("LEADERBOARD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        let mut config = Self::with_api_url(&api_url)?;
        config.request_timeout_secs = env_parse("LEADERBOARD_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
        config.batch_size = env_parse("LEADERBOARD_BATCH_SIZE", DEFAULT_BATCH_SIZE)?;
        if config.batch_size == 0 {
            return Err(ConfigError::InvalidValue { key: "LEADERBOARD_BATCH_SIZE", value: "0".to_owned() });
        }
        Ok(config)
    }

    /// Default settings pointed at `api_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] unless the URL starts with `http://` or `https://`.
    pub fn with_api_url(api_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: normalize_api_url(api_url)?,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            batch_size: DEFAULT_BATCH_SIZE,
        })
    }
}

fn normalize_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
    if !has_host {
        return Err(ConfigError::InvalidApiUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

fn env_parse<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        Err(_) => Ok(default),
    }
}
