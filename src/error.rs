//! Error types for tama-map

use thiserror::Error;

/// Main error type for tama-map operations
#[derive(Error, Debug)]
pub enum Error {
    /// Backend answered with a non-success status.
    ///
    /// `message` is the server-supplied `error` field when the body carried
    /// one, otherwise the status' canonical reason.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Unknown street: {0}")]
    UnknownStreet(String),

    #[error("Render error: {0}")]
    Render(String),
}

/// Result type alias for tama-map operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = Error::Status {
            status: 400,
            message: "bad radius".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 400: bad radius");
    }
}
