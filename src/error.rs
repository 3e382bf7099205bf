use thiserror::Error;

/// Main error type for Pinboard API operations
#[derive(Debug, Error)]
pub enum PinboardError {
    /// No usable API token could be resolved from the configured source
    #[error("configuration error: {0}")]
    Config(String),

    /// A required pin field failed local validation; no request was made
    #[error("validation error: {0}")]
    Validation(String),

    /// Network-level failure (DNS, connect, timeout, read)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status returned by the API
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// Error code reported by the API inside a successful HTTP response
    #[error("API error: {code}")]
    Api { code: String },

    /// XML response decoding error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// JSON response decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl PinboardError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        PinboardError::Config(message.into())
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PinboardError::Validation(message.into())
    }

    /// Check if this error is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, PinboardError::Config(_))
    }

    /// Check if this error is a local validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, PinboardError::Validation(_))
    }

    /// Check if this error is a network transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, PinboardError::Transport(_))
    }

    /// Check if this error was reported by the remote API (status or body)
    pub fn is_remote(&self) -> bool {
        matches!(self, PinboardError::Http { .. } | PinboardError::Api { .. })
    }

    /// Get the HTTP status code if this is an HTTP-level error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PinboardError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for Pinboard operations
pub type Result<T> = std::result::Result<T, PinboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let error = PinboardError::validation("missing description");
        assert!(error.is_validation());
        assert!(!error.is_config());
        assert!(!error.is_remote());

        let error = PinboardError::config("no API token");
        assert!(error.is_config());
    }

    #[test]
    fn test_remote_errors() {
        let error = PinboardError::Http {
            status: 401,
            body: "401 Forbidden".to_string(),
        };
        assert!(error.is_remote());
        assert_eq!(error.status_code(), Some(401));

        let error = PinboardError::Api {
            code: "must provide title".to_string(),
        };
        assert!(error.is_remote());
        assert_eq!(error.status_code(), None);
    }

    #[test]
    fn test_error_display() {
        let error = PinboardError::Api {
            code: "something went wrong".to_string(),
        };
        assert_eq!(error.to_string(), "API error: something went wrong");

        let error = PinboardError::Http {
            status: 500,
            body: "oops".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP error 500: oops");
    }
}
