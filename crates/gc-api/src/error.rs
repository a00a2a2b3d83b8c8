use thiserror::Error;

/// Errors from a single GET against the API.
#[derive(Debug, Error)]
pub enum GetError {
    /// Transport-level failure, including connect errors and timeouts.
    #[error("the request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    /// The server answered outside the 2xx range. The raw body is kept for
    /// diagnostics.
    #[error("the request failed with status code {status}: {body}")]
    ResponseError {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("the response body could not be read: {0}")]
    ResponseBodyError(#[source] reqwest::Error),
    #[error("unable to parse the response body: {0}")]
    ParseError(#[from] serde_json::Error),
}
