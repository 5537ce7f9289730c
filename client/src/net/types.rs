//! Wire types for the remote auth service.
//!
//! DESIGN
//! ======
//! Field names follow the service's camelCase JSON. Unknown fields in the
//! user object are ignored so the client keeps working as the service grows.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The signed-in user as returned by `/login` and `/register`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct User {
    /// Server-side identifier, when the service sends one (`id` or `_id`).
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    pub email: String,
}

/// Email + password body posted to `/login` and `/register`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful `/login` or `/register` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: User,
    pub access_token: String,
}

/// Successful `/refresh-token` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Failure talking to the auth service.
///
/// Every variant is handled the same way by the UI (logged, not shown); the
/// split exists so console output says what went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The service answered with a non-2xx status.
    #[error("{path} failed: {status}")]
    Status { path: &'static str, status: u16 },

    /// The response body did not match the expected schema.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// HTTP calls are browser-only; SSR renders never reach the service.
    #[error("not available on server")]
    Unavailable,
}
