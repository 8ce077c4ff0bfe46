use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::error::{MatchdayError, Result};

/// Environment variable holding the API base url.
pub const API_URL_VAR: &str = "MATCHDAY_API_URL";
/// Environment variable holding the request timeout in whole seconds.
pub const TIMEOUT_VAR: &str = "MATCHDAY_TIMEOUT_SECS";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`MatchdayClient`](crate::MatchdayClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Validate `base_url` and use the default timeout.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read [`API_URL_VAR`] and, if set, [`TIMEOUT_VAR`].
    pub fn from_env() -> Result<Self> {
        Self::resolve(None, None)
    }

    /// Use the given values, reading the environment only for those missing.
    pub fn resolve(base_url: Option<&str>, timeout: Option<Duration>) -> Result<Self> {
        Self::resolve_with(base_url, timeout, |name| env::var(name).ok())
    }

    fn resolve_with(
        base_url: Option<&str>,
        timeout: Option<Duration>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let config = match base_url {
            Some(url) => Self::new(url)?,
            None => {
                let url = lookup(API_URL_VAR).ok_or(MatchdayError::MissingConfig(API_URL_VAR))?;
                Self::new(&url)?
            }
        };
        let timeout = match timeout {
            Some(timeout) => Some(timeout),
            None => lookup(TIMEOUT_VAR).map(|raw| parse_timeout(&raw)).transpose()?,
        };
        Ok(match timeout {
            Some(timeout) => config.with_timeout(timeout),
            None => config,
        })
    }
}

/// Parse a base url, making sure relative joins keep its whole path.
pub fn parse_base_url(value: &str) -> Result<Url> {
    let invalid = |reason: String| MatchdayError::InvalidBaseUrl {
        value: value.to_string(),
        reason,
    };
    let mut url = Url::parse(value.trim()).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("url cannot be a base".to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Parse a positive number of seconds.
pub fn parse_timeout(value: &str) -> Result<Duration> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(MatchdayError::InvalidTimeout {
            value: value.to_string(),
        }),
    }
}
