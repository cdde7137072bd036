use api::GatewayError;

/// Where an auth form shows an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Inside the form, next to the inputs.
    Inline(String),
    /// As a blocking alert.
    Alert(String),
}

impl Feedback {
    /// A taken username or email is shown inline; anything else alerts.
    pub fn for_sign_up(error: &GatewayError) -> Self {
        match error {
            GatewayError::Conflict(message) => Self::Inline(message.clone()),
            other => Self::Alert(other.to_string()),
        }
    }

    /// Wrong credentials are shown inline; anything else alerts.
    pub fn for_log_in(error: &GatewayError) -> Self {
        match error {
            GatewayError::Unauthorized(message) => Self::Inline(message.clone()),
            other => Self::Alert(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_conflict_is_inline() {
        let err = GatewayError::Conflict("Username already taken".into());
        assert_eq!(
            Feedback::for_sign_up(&err),
            Feedback::Inline("Username already taken".into())
        );
    }

    #[test]
    fn test_sign_up_other_errors_alert() {
        let err = GatewayError::from_status(500, "db down".into());
        assert!(matches!(Feedback::for_sign_up(&err), Feedback::Alert(_)));

        let err = GatewayError::Unauthorized("nope".into());
        assert!(matches!(Feedback::for_sign_up(&err), Feedback::Alert(_)));
    }

    #[test]
    fn test_log_in_bad_credentials_is_inline() {
        let err = GatewayError::Unauthorized("Invalid credentials".into());
        assert_eq!(
            Feedback::for_log_in(&err),
            Feedback::Inline("Invalid credentials".into())
        );
        let err = GatewayError::Conflict("?".into());
        assert!(matches!(Feedback::for_log_in(&err), Feedback::Alert(_)));
    }
}
