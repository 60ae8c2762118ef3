//! Admin authentication contract.
//!
//! The provider itself is external. This module fixes the operation set the
//! dashboard depends on and the error-kind-to-message mapping surfaced to
//! the admin: each failure kind gets its own actionable message.

use thiserror::Error;

/// An authenticated admin session as pushed by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub display_name: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing credentials")]
    MissingCredentials,
    #[error("invalid email format")]
    InvalidEmail,
    #[error("account disabled")]
    UserDisabled,
    #[error("unknown account")]
    UserNotFound,
    #[error("wrong credential")]
    WrongPassword,
    #[error("rate limited")]
    TooManyRequests,
    #[error("network failure")]
    Network,
    #[error("{0}")]
    Other(String),
}

impl AuthError {
    /// The user-facing message for each failure kind. Distinct per kind so
    /// the login surface never shows a generic catch-all for a known cause.
    pub fn user_message(&self) -> &str {
        match self {
            Self::MissingCredentials => "Please enter both email and password",
            Self::InvalidEmail => "Invalid email address format",
            Self::UserDisabled => "This account has been disabled",
            Self::UserNotFound => "No account found with this email",
            Self::WrongPassword => "Incorrect password",
            Self::TooManyRequests => "Too many failed attempts. Please try again later",
            Self::Network => "Network error. Please check your connection",
            Self::Other(message) => message,
        }
    }
}

/// Callback invoked with the current session, or `None` when signed out.
pub type SessionCallback = Box<dyn Fn(Option<&Session>) + Send>;

/// Authentication provider contract consumed by the dashboard.
pub trait AuthProvider {
    fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;
    fn sign_out(&self) -> Result<(), AuthError>;
    /// Register for session pushes. The provider calls back immediately with
    /// the current state and again on every change.
    fn on_session_change(&mut self, callback: SessionCallback);
}

/// Pre-flight check before any provider round trip.
pub fn check_credentials(email: &str, password: &str) -> Result<(), AuthError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_error_kind_has_a_distinct_message() {
        let kinds = [
            AuthError::MissingCredentials,
            AuthError::InvalidEmail,
            AuthError::UserDisabled,
            AuthError::UserNotFound,
            AuthError::WrongPassword,
            AuthError::TooManyRequests,
            AuthError::Network,
        ];
        let mut messages: Vec<&str> = kinds.iter().map(|k| k.user_message()).collect();
        messages.sort_unstable();
        messages.dedup();
        assert_eq!(messages.len(), kinds.len(), "messages must not collide");
    }

    #[test]
    fn empty_credentials_fail_before_any_provider_call() {
        assert_eq!(
            check_credentials("", "secret"),
            Err(AuthError::MissingCredentials)
        );
        assert_eq!(
            check_credentials("admin@example.com", ""),
            Err(AuthError::MissingCredentials)
        );
        assert_eq!(check_credentials("admin@example.com", "secret"), Ok(()));
    }
}
