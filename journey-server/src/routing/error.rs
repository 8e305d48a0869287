//! Routing client error types.

/// Errors from the routing provider adapter.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("routing provider error {status}: {message}")]
    Unavailable { status: u16, message: String },

    /// Provider answered successfully but reported no routes
    #[error("no route found between the given points")]
    NoRouteFound,

    /// Response body could not be parsed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}
