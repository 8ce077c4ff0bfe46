pub(crate) mod leagues;
pub(crate) mod matches;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{MatchdayError, Result};

/// Resolve `path` against the API base url.
pub(crate) fn endpoint(base: &Url, path: &str) -> Result<Url> {
    base.join(path).map_err(|e| MatchdayError::InvalidBaseUrl {
        value: base.to_string(),
        reason: e.to_string(),
    })
}

/// Fetch a URL and decode the JSON response body.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &Url,
) -> Result<T> {
    debug!(%url, "fetching");

    let response = client.get(url.clone()).send().await.map_err(|e| {
        debug!(%url, error = %e, "request failed");
        MatchdayError::Http {
            url: url.to_string(),
            source: e,
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        debug!(%url, %status, "unexpected status");
        return Err(MatchdayError::UnexpectedStatus {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(|e| {
        debug!(%url, error = %e, "failed to read body");
        MatchdayError::ResponseBody {
            url: url.to_string(),
            source: e,
        }
    })?;

    serde_json::from_str(&body).map_err(|e| {
        debug!(%url, error = %e, "failed to decode body");
        MatchdayError::Decode {
            url: url.to_string(),
            source: e,
        }
    })
}
