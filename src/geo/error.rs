use thiserror::Error;

/// Failures of a localities request.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("invalid API URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server answered {status}")]
    Status { status: reqwest::StatusCode },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GeoError {
    /// Short reason suitable for the one-line dropdown status.
    pub fn short_reason(&self) -> String {
        match self {
            GeoError::InvalidUrl { .. } => "invalid API URL".to_string(),
            GeoError::Http(e) if e.is_timeout() => "request timed out".to_string(),
            GeoError::Http(e) if e.is_connect() => "could not connect".to_string(),
            GeoError::Http(_) => "network error".to_string(),
            GeoError::Status { status } => format!("HTTP {}", status.as_u16()),
            GeoError::Decode(_) => "malformed response".to_string(),
        }
    }
}
