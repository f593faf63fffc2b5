//! Error types for the assistant
//!
//! Generation errors are classified the way the upstream API reports
//! them so the session can log something useful before substituting its
//! fixed reply.

use thiserror::Error;

/// Result type for text generation
pub type GenerationResult<T> = std::result::Result<T, GenerationError>;

/// Failures of a remote text generation call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// No API key configured
    #[error("API key is not configured")]
    MissingApiKey,

    /// 400, 401, 403, 404
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// 429
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// 500, 502, 503, 504
    #[error("Server error: {0}")]
    Server(String),

    /// Connection failures and timeouts
    #[error("Network error: {0}")]
    Network(String),

    /// The reply did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Any other status
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl GenerationError {
    /// Map a non-success HTTP status and its body to an error
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            400 => GenerationError::InvalidRequest(format!("Bad request: {}", body)),
            401 => GenerationError::InvalidRequest(format!("Unauthorized: {}", body)),
            403 => GenerationError::InvalidRequest(format!("Forbidden: {}", body)),
            404 => GenerationError::InvalidRequest(format!("Not found: {}", body)),
            429 => GenerationError::RateLimited(body.to_string()),
            500 | 502 | 503 | 504 => {
                GenerationError::Server(format!("status {}: {}", status, body))
            }
            _ => GenerationError::Unknown(format!("status {}: {}", status, body)),
        }
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        // Error texts end up in logs; drop the request URL from them
        let err = err.without_url();
        if err.is_timeout() {
            GenerationError::Network(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            GenerationError::Network(format!("Connection failed: {}", err))
        } else if err.is_decode() {
            GenerationError::InvalidResponse(format!("Failed to decode response: {}", err))
        } else {
            GenerationError::Network(err.to_string())
        }
    }
}

/// Invalid configuration values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown phrasing policy: {0} (expected \"random\" or \"fixed\")")]
    UnknownPhrasing(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            GenerationError::from_status(401, "bad key"),
            GenerationError::InvalidRequest(msg) if msg.contains("Unauthorized")
        ));
        assert!(matches!(GenerationError::from_status(429, ""), GenerationError::RateLimited(_)));
        assert!(matches!(GenerationError::from_status(503, ""), GenerationError::Server(_)));
        assert!(matches!(GenerationError::from_status(418, ""), GenerationError::Unknown(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(GenerationError::MissingApiKey.to_string(), "API key is not configured");
        assert_eq!(
            ConfigError::UnknownPhrasing("wild".into()).to_string(),
            "Unknown phrasing policy: wild (expected \"random\" or \"fixed\")"
        );
    }
}
