use thiserror::Error;

/// Classification of a single fetch attempt.
///
/// The fetcher never retries; the scheduler inspects
/// [`FetchError::is_recoverable`] to decide between the short retry delay and
/// halting outright.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The provider rejected the API key (HTTP 401). Not retried.
    #[error("the provider rejected the API key (HTTP 401)")]
    Unauthorized,

    #[error("network request failed for {0}")]
    Network(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response body")]
    Body(#[source] reqwest::Error),

    #[error("failed to parse forecast payload")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Everything except an authentication failure is worth another attempt.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, FetchError::Unauthorized)
    }
}
