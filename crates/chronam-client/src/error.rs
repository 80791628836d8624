use thiserror::Error;

/// Errors returned by the Chronicling America client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// A page request failed again after the pause and second attempt.
    /// `status` is the HTTP status of the second failure when one exists
    /// (network-level failures have none).
    #[error("request to {url} failed after pause and second attempt ({detail}); try again later")]
    RetryFailed {
        url: String,
        status: Option<u16>,
        detail: String,
    },

    /// The response body was not a valid search page. Indicates an
    /// upstream contract violation, so it is never retried.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL could not be parsed.
    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
