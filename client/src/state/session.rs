//! Session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<SessionState>` is provided at the app root. Login/register
//! overwrite it, the boot-time refresh fills in the token, and route guards
//! read it to decide between rendering and redirecting.
//!
//! The session lives only in memory. It is never persisted and never cleared;
//! a stale user next to an expired token is left as-is.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{ApiError, AuthResponse, User};
use crate::util::token;

/// The signed-in user and their access token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub access_token: Option<String>,
}

/// Session plus whether the boot-time token refresh is still in flight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Session,
    pub refreshing: bool,
}

impl SessionState {
    /// Initial state at page load: empty session, refresh pending.
    pub fn booting() -> Self {
        Self { session: Session::default(), refreshing: true }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.session.access_token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    /// Only a session holding no token at all asks the service for one.
    pub fn needs_refresh(&self) -> bool {
        self.session.access_token.is_none()
    }

    /// Store a refreshed token. The user field is left untouched.
    pub fn apply_refresh(&mut self, access_token: String) {
        self.session.access_token = Some(access_token);
    }

    /// Replace the whole session with a login/register result.
    pub fn apply_auth(&mut self, response: AuthResponse) {
        self.session = Session { user: Some(response.user), access_token: Some(response.access_token) };
    }

    /// Apply a login/register outcome. On failure the session is unchanged
    /// and the error is handed back for logging.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] from `result` unchanged.
    pub fn apply_auth_result(&mut self, result: Result<AuthResponse, ApiError>) -> Result<(), ApiError> {
        self.apply_auth(result?);
        Ok(())
    }

    pub fn finish_refresh(&mut self) {
        self.refreshing = false;
    }

    /// Whether the held token decodes and is unexpired at `now_secs`.
    pub fn is_authenticated_at(&self, now_secs: f64) -> bool {
        token::is_authenticated_at(self.access_token(), now_secs)
    }
}
