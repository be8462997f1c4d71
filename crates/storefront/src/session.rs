//! Session state: a placeholder authentication state machine.
//!
//! Exactly two states: anonymous (initial) and authenticated. Login is a
//! deliberate stub - any non-empty email/password pair is accepted without
//! format validation or a backend check. Nothing is persisted; the session
//! lives for the process lifetime only. There is no token and no expiry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during session operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email or password was empty.
    #[error("Credenciales inválidas")]
    InvalidCredentials,
}

/// The logged-in user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Email exactly as entered at login.
    pub email: String,
    /// Display name: the part of the email before the `@` (the full email
    /// when there is none).
    pub name: String,
}

/// Authentication state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// No user logged in.
    #[default]
    Anonymous,
    /// A user is logged in.
    Authenticated(User),
}

/// Holds the current session.
#[derive(Debug, Default)]
pub struct SessionStore {
    session: Session,
}

impl SessionStore {
    /// Create a store in the anonymous state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a user is logged in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self.session, Session::Authenticated(_))
    }

    /// The logged-in user, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        match &self.session {
            Session::Authenticated(user) => Some(user),
            Session::Anonymous => None,
        }
    }

    /// Log in with email and password.
    ///
    /// Accepts any pair of non-empty strings - no format validation and no
    /// credential check against a backend. Re-login while already
    /// authenticated simply replaces the user record.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when either field is empty;
    /// the state is left unchanged.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        let name = email.split('@').next().unwrap_or(email).to_owned();
        let user = User {
            email: email.to_owned(),
            name,
        };

        self.session = Session::Authenticated(user.clone());
        Ok(user)
    }

    /// Log out unconditionally. A no-op when already anonymous.
    pub fn logout(&mut self) {
        self.session = Session::Anonymous;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_login_derives_name_from_email() {
        let mut store = SessionStore::new();
        let user = store.login("a@b.com", "x").unwrap();

        assert!(store.is_authenticated());
        assert_eq!(user.name, "a");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(store.current_user().unwrap().name, "a");
    }

    #[test]
    fn test_login_without_at_uses_full_email_as_name() {
        let mut store = SessionStore::new();
        let user = store.login("lector", "x").unwrap();
        assert_eq!(user.name, "lector");
    }

    #[test]
    fn test_empty_email_rejected_state_unchanged() {
        let mut store = SessionStore::new();
        let result = store.login("", "x");

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_empty_password_rejected() {
        let mut store = SessionStore::new();
        assert!(store.login("a@b.com", "").is_err());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_failed_login_keeps_previous_user() {
        let mut store = SessionStore::new();
        store.login("a@b.com", "x").unwrap();

        assert!(store.login("", "x").is_err());
        assert_eq!(store.current_user().unwrap().email, "a@b.com");
    }

    #[test]
    fn test_relogin_replaces_user() {
        let mut store = SessionStore::new();
        store.login("a@b.com", "x").unwrap();
        store.login("otra@b.com", "y").unwrap();

        assert_eq!(store.current_user().unwrap().name, "otra");
    }

    #[test]
    fn test_logout_returns_to_anonymous() {
        let mut store = SessionStore::new();
        store.login("a@b.com", "x").unwrap();
        store.logout();

        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_logout_when_anonymous_is_noop() {
        let mut store = SessionStore::new();
        store.logout();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_invalid_credentials_message() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Credenciales inválidas"
        );
    }
}
