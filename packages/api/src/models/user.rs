//! # User model
//!
//! [`User`] is the session owner as the backend reports it from
//! `GET /api/users`, sign-up and log-in. It never carries password material.
//! Comments embed a trimmed-down user (`_id` and `username` only), so `email`
//! defaults to empty when absent.
//!
//! [`SignUpCredentials`] and [`LoginCredentials`] are the JSON bodies of the
//! sign-up and log-in endpoints.

use serde::{Deserialize, Serialize};

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Body of `POST /api/users/signup`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignUpCredentials {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/users/login`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_backend_json() {
        let user: User = serde_json::from_str(
            r#"{"_id":"64b0c0ffee","username":"julia","email":"julia@example.com"}"#,
        )
        .unwrap();
        assert_eq!(user.id, "64b0c0ffee");
        assert_eq!(user.username, "julia");
        assert_eq!(user.email, "julia@example.com");
    }

    #[test]
    fn test_embedded_user_without_email() {
        let user: User = serde_json::from_str(r#"{"_id":"u1","username":"julia"}"#).unwrap();
        assert!(user.email.is_empty());
    }
}
