//! REST calls to the remote auth service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sent with
//! credentials so the service can read and set its refresh cookie.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Network errors, non-2xx
//! statuses and schema mismatches are separate variants for logging only.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiError, AuthResponse, Credentials, RefreshResponse};

pub const REFRESH_TOKEN_PATH: &str = "/refresh-token";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    crate::config::auth_endpoint(path)
}

/// Exchange the refresh cookie for a fresh access token via `GET /refresh-token`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the service responds with a
/// non-OK status, or the body has no `accessToken`.
pub async fn refresh_token() -> Result<RefreshResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint(REFRESH_TOKEN_PATH))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(REFRESH_TOKEN_PATH, resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Sign in with email and password via `POST /login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the service rejects the
/// credentials, or the body does not carry a user and token.
pub async fn login(credentials: &Credentials) -> Result<AuthResponse, ApiError> {
    post_credentials(LOGIN_PATH, credentials).await
}

/// Create an account via `POST /register`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the service rejects the
/// signup, or the body does not carry a user and token.
pub async fn register(credentials: &Credentials) -> Result<AuthResponse, ApiError> {
    post_credentials(REGISTER_PATH, credentials).await
}

async fn post_credentials(path: &'static str, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint(path))
            .credentials(web_sys::RequestCredentials::Include)
            .json(credentials)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(path, resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, credentials);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T>(path: &'static str, resp: gloo_net::http::Response) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    if !resp.ok() {
        return Err(ApiError::Status { path, status: resp.status() });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
