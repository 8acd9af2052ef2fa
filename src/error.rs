//! Error types for the jobtrack CLI

use thiserror::Error;

use crate::client::models::JobStatus;

/// Result type alias for jobtrack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot move a job from '{from}' to '{to}'. {}", allowed_hint(.from))]
    InvalidTransition { from: JobStatus, to: JobStatus },

    #[error("Company not found: {0}. Run `jobtrack company list` to see your companies.")]
    CompanyNotFound(String),

    #[error("Job not found: {0}")]
    JobNotFound(i64),
}

fn allowed_hint(from: &JobStatus) -> String {
    if from.is_terminal() {
        format!("'{}' is a final status.", from)
    } else {
        let names: Vec<&str> = from.allowed_transitions().iter().map(|s| s.as_str()).collect();
        format!("Allowed: {}", names.join(", "))
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Refresh of the access token failed; the stored session was cleared.
    #[error("Session expired ({0}). Run `jobtrack login` to sign in again.")]
    SessionExpired(#[source] Box<ApiError>),

    #[error("Access denied: {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Client error with a server-provided message, shown verbatim.
    #[error("{0}")]
    Validation(String),

    #[error("The server failed to process the request (HTTP {0}). Please try again later.")]
    ServerError(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `jobtrack login` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Not logged in. Run `jobtrack login` to sign in.")]
    NotLoggedIn,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_unauthorized_message() {
        let err = ApiError::Unauthorized("Invalid email or password".to_string());
        assert!(err.to_string().contains("Invalid email or password"));
    }

    #[test]
    fn test_session_expired_points_to_login() {
        let err = ApiError::SessionExpired(Box::new(ApiError::Unauthorized(
            "Token has expired".to_string(),
        )));
        let msg = err.to_string();
        assert!(msg.contains("jobtrack login"));
        assert!(msg.contains("Token has expired"));
    }

    #[test]
    fn test_session_expired_keeps_source() {
        use std::error::Error as _;

        let err = ApiError::SessionExpired(Box::new(ApiError::Network("down".to_string())));
        let source = err.source().expect("source");
        assert!(source.to_string().contains("down"));
    }

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = ApiError::Validation("Invalid status transition".to_string());
        assert_eq!(err.to_string(), "Invalid status transition");
    }

    #[test]
    fn test_server_error_is_generic() {
        let err = ApiError::ServerError(500);
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("try again"));
    }

    #[test]
    fn test_api_error_network() {
        let err = ApiError::Network("Connection refused".to_string());
        assert!(err.to_string().contains("Connection refused"));
    }

    #[test]
    fn test_config_error_not_logged_in() {
        let err = ConfigError::NotLoggedIn;
        assert!(err.to_string().contains("jobtrack login"));
    }

    #[test]
    fn test_invalid_transition_lists_allowed() {
        let err = Error::InvalidTransition {
            from: JobStatus::Applied,
            to: JobStatus::Offer,
        };
        let msg = err.to_string();
        assert!(msg.contains("'applied'"));
        assert!(msg.contains("interview, rejected"));
    }

    #[test]
    fn test_invalid_transition_from_terminal() {
        let err = Error::InvalidTransition {
            from: JobStatus::Offer,
            to: JobStatus::Rejected,
        };
        assert!(err.to_string().contains("final status"));
    }

    #[test]
    fn test_error_from_api_error() {
        let err: Error = ApiError::ServerError(503).into();

        match err {
            Error::Api(ApiError::ServerError(503)) => (),
            _ => panic!("Expected Error::Api(ApiError::ServerError)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
