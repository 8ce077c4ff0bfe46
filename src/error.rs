/// All errors that can occur while talking to the matchday API.
#[derive(thiserror::Error, Debug)]
pub enum MatchdayError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The response body did not have the expected shape.
    #[error("unexpected payload from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// The leagues payload was well formed but contained no league.
    #[error("no league available from {url}")]
    NoLeagues { url: String },

    /// The configured API base URL could not be parsed.
    #[error("invalid API base url {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    /// The configured request timeout is not a positive number of seconds.
    #[error("invalid timeout {value:?}: expected a positive number of seconds")]
    InvalidTimeout { value: String },

    /// A required configuration value is absent.
    #[error("missing configuration value {0}")]
    MissingConfig(&'static str),

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
}

impl MatchdayError {
    /// Whether the server answered but the payload could not be used.
    ///
    /// Transport failures (no answer, bad status) return `false`.
    pub fn is_data_error(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::NoLeagues { .. })
    }
}

pub type Result<T> = std::result::Result<T, MatchdayError>;
