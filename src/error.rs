//! Blog API error types

use thiserror::Error;

/// Errors surfaced by the blog API client
#[derive(Error, Debug)]
pub enum BlogError {
    /// Transport-level failure (DNS, connect, broken connection)
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request exceeded the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Server answered with a non-success HTTP status
    #[error("HTTP status {code}: {message}")]
    Status {
        /// HTTP status code (e.g., 404, 500)
        code: u16,
        /// Response body, as far as it could be read
        message: String,
    },

    /// Response body was not the expected JSON payload
    #[error("Invalid payload: {0}")]
    Json(#[source] serde_json::Error),

    /// Base URL or request path could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A request hook rejected the request before it was sent
    #[error("Request rejected by middleware: {0}")]
    Middleware(String),
}

/// Result type alias using BlogError
pub type Result<T> = std::result::Result<T, BlogError>;
