//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bundle talks to a single remote auth service whose base URL is
//! compiled in. Set `AUTH_API_BASE_URL` while building the WASM bundle to
//! point it elsewhere; there is no runtime configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Auth service used when no build-time override is given.
pub const DEFAULT_AUTH_API_BASE_URL: &str = "https://0qbc24.sse.codesandbox.io";

/// Base URL of the remote auth service.
pub fn auth_api_base_url() -> &'static str {
    match option_env!("AUTH_API_BASE_URL") {
        Some(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_AUTH_API_BASE_URL,
    }
}

/// Join `base` and `path` with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Absolute URL of an auth service endpoint.
pub fn auth_endpoint(path: &str) -> String {
    join_url(auth_api_base_url(), path)
}
