//! Error types returned by the gateway.

use thiserror::Error;

/// Failure of a call to the recipe backend.
///
/// The gateway is the only place that turns HTTP statuses into these
/// variants. Callers branch on [`GatewayError::Conflict`] or
/// [`GatewayError::Unauthorized`] when they want inline feedback and treat
/// everything else uniformly.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP 401: there is no valid session.
    #[error("{0}")]
    Unauthorized(String),

    /// HTTP 409: the resource already exists (duplicate username or email).
    #[error("{0}")]
    Conflict(String),

    /// Any other non-2xx status.
    #[error("Request failed with status: {status} and message: {message}")]
    Request { status: u16, message: String },

    /// The request never produced a usable response: unreachable host,
    /// aborted fetch, or a body that is not the expected JSON.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl GatewayError {
    /// Classify a non-2xx status and the `error` message from its JSON body.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => Self::Unauthorized(message),
            409 => Self::Conflict(message),
            _ => Self::Request { status, message },
        }
    }
}

/// Invalid gateway configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid backend URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_unauthorized() {
        let err = GatewayError::from_status(401, "User not authenticated".into());
        assert!(matches!(err, GatewayError::Unauthorized(_)));
        assert_eq!(err.to_string(), "User not authenticated");
    }

    #[test]
    fn test_classifies_conflict() {
        let err = GatewayError::from_status(409, "Username already taken".into());
        assert!(matches!(err, GatewayError::Conflict(_)));
        assert_eq!(err.to_string(), "Username already taken");
    }

    #[test]
    fn test_other_statuses_keep_status_and_message() {
        let err = GatewayError::from_status(500, "boom".into());
        assert!(matches!(err, GatewayError::Request { status: 500, .. }));
        assert_eq!(
            err.to_string(),
            "Request failed with status: 500 and message: boom"
        );

        let err = GatewayError::from_status(404, "Recipe not found".into());
        assert!(matches!(err, GatewayError::Request { status: 404, .. }));
    }
}
