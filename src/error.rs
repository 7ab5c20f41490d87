use thiserror::Error;

/// Main error type for Shipper API operations
#[derive(Debug, Error)]
pub enum ShipperError {
    /// A required parameter is absent (or set to `null`)
    #[error("'{name}' is required.")]
    MissingParameter { name: String },

    /// A parameter is present but its value has a type the operation does not accept
    #[error("'{name}' type must be {expected}, got {actual}.")]
    TypeMismatch {
        name: String,
        expected: String,
        actual: String,
    },

    /// Connection-level failure: the request never produced an HTTP response
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The API answered with a non-2xx status
    #[error("HTTP error {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Request building error
    #[error("failed to build request: {0}")]
    RequestBuild(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Missing or malformed environment configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl ShipperError {
    /// Create a missing parameter error
    pub fn missing(name: impl Into<String>) -> Self {
        ShipperError::MissingParameter { name: name.into() }
    }

    /// Create a transport error from a plain message, for custom transports
    pub fn transport(message: impl Into<String>) -> Self {
        let message: String = message.into();
        ShipperError::Transport(message.into())
    }

    /// Check if this error was raised by parameter validation (before any network call)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ShipperError::MissingParameter { .. } | ShipperError::TypeMismatch { .. }
        )
    }

    /// Check if this error is a not found error (404)
    pub fn is_not_found(&self) -> bool {
        matches!(self, ShipperError::HttpStatus { status: 404, .. })
    }

    /// Get the HTTP status code if the API answered
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ShipperError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ShipperError {
    fn from(err: reqwest::Error) -> Self {
        ShipperError::Transport(Box::new(err))
    }
}

/// Result type for Shipper operations
pub type Result<T> = std::result::Result<T, ShipperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_message() {
        let error = ShipperError::missing("rateID");
        assert_eq!(error.to_string(), "'rateID' is required.");
        assert!(error.is_validation());
        assert_eq!(error.status_code(), None);
    }

    #[test]
    fn test_type_mismatch_message() {
        let error = ShipperError::TypeMismatch {
            name: "l".to_string(),
            expected: "integer|double".to_string(),
            actual: "string".to_string(),
        };
        assert_eq!(error.to_string(), "'l' type must be integer|double, got string.");
        assert!(error.is_validation());
    }

    #[test]
    fn test_error_not_found() {
        let error = ShipperError::HttpStatus {
            status: 404,
            body: r#"{"status":"fail"}"#.to_string(),
        };
        assert!(error.is_not_found());
        assert!(!error.is_validation());
        assert_eq!(error.status_code(), Some(404));
    }

    #[test]
    fn test_transport_is_distinct_from_status() {
        let error = ShipperError::transport("connection refused");
        assert_eq!(error.status_code(), None);
        assert!(!error.is_validation());
        assert_eq!(error.to_string(), "transport error: connection refused");
    }
}
