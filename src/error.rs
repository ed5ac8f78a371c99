use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// An empty provider answer is not an error; see [`crate::InterestOverTime::EmptyResult`].
#[derive(Debug, Error)]
pub enum TrendsError {
    /// The query parameters were rejected locally before any request was sent.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The client configuration (locale, builder input) is not usable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The provider could not be reached (connect failure, timeout, broken body).
    #[error("provider unavailable: {0}")]
    ProviderUnavailable(#[from] reqwest::Error),

    /// The provider answered but refused the request (bad request, quota, authorization).
    #[error("provider rejected request with status {status} at {url}: {detail}")]
    ProviderRejected {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
        /// A short excerpt of what the provider said, if anything.
        detail: String,
    },

    /// The data received from the provider was in an unexpected format or was missing a required field.
    #[error("data format unexpected or missing field: {0}")]
    Data(String),

    /// The request payload could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A provided URL could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl TrendsError {
    /// Returns `true` if the failure happened before anything was sent to the provider.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            TrendsError::InvalidQuery(_) | TrendsError::InvalidConfig(_) | TrendsError::Url(_)
        )
    }
}
