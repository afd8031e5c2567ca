//! Explicit session state.
//!
//! The signed-in user's email lives in an owned `Session` object that the
//! caller passes into whatever needs it, backed by the preference store so
//! it survives restarts. There is no implicit global session.

use std::path::Path;

use skycast_store::{Preferences, StoreResult};

/// The signed-in user, if any.
#[derive(Debug)]
pub struct Session {
    prefs: Preferences,
}

impl Session {
    /// Load the session from the preference file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let prefs = Preferences::load(path)?;
        Ok(Self { prefs })
    }

    /// The signed-in user's email, or `None` when signed out.
    pub fn current_email(&self) -> Option<&str> {
        self.prefs.user_email()
    }

    /// Record a successful login.
    pub fn sign_in(&mut self, email: &str) -> StoreResult<()> {
        tracing::info!("Signing in {}", email);
        self.prefs.set_user_email(email)
    }

    /// Clear the session.
    pub fn sign_out(&mut self) -> StoreResult<()> {
        tracing::info!("Signing out");
        self.prefs.clear_user_email()
    }

    /// Email to associate new weather records with: the signed-in email, or
    /// empty when no session is active.
    pub fn record_email(&self) -> &str {
        self.current_email().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_session_starts_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::load(dir.path().join("prefs.json")).unwrap();
        assert!(session.current_email().is_none());
        assert_eq!(session.record_email(), "");
    }

    #[test]
    fn test_sign_in_and_out() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::load(dir.path().join("prefs.json")).unwrap();

        session.sign_in("ann@x.com").unwrap();
        assert_eq!(session.current_email(), Some("ann@x.com"));
        assert_eq!(session.record_email(), "ann@x.com");

        session.sign_out().unwrap();
        assert!(session.current_email().is_none());
    }

    #[test]
    fn test_session_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        {
            let mut session = Session::load(&path).unwrap();
            session.sign_in("ann@x.com").unwrap();
        }

        let session = Session::load(&path).unwrap();
        assert_eq!(session.current_email(), Some("ann@x.com"));
    }
}
