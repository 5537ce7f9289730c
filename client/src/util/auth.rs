//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The protected route renders, waits, or redirects based on the same
//! [`gate`] decision, and the app root restores the session exactly once
//! per page load through [`restore_session`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::app::LOGIN_ROUTE;
use crate::net::api;
use crate::state::session::SessionState;
use crate::util::clock;

/// What a protected route should show for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Boot-time refresh still in flight.
    Waiting,
    /// Token decodes and is unexpired.
    Granted,
    /// Refresh settled without a usable token.
    Denied,
}

pub fn gate(state: &SessionState, now_secs: f64) -> Gate {
    if state.refreshing {
        Gate::Waiting
    } else if state.is_authenticated_at(now_secs) {
        Gate::Granted
    } else {
        Gate::Denied
    }
}

pub fn should_redirect_unauth(state: &SessionState, now_secs: f64) -> bool {
    gate(state, now_secs) == Gate::Denied
}

/// Redirect to `/login` whenever the refresh has settled and the held token
/// is missing, malformed or expired.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let redirect = session.with(|state| should_redirect_unauth(state, clock::now_secs()));
        if redirect {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}

/// Try once to obtain an access token from the refresh cookie, then mark the
/// session as settled. Failures are logged and leave the session empty.
pub async fn restore_session(session: RwSignal<SessionState>) {
    if session.with_untracked(SessionState::needs_refresh) {
        match api::refresh_token().await {
            Ok(body) => {
                log::debug!("access token restored from refresh cookie");
                session.update(|state| state.apply_refresh(body.access_token));
            }
            Err(e) => log::warn!("token refresh failed: {e}"),
        }
    }
    session.update(SessionState::finish_refresh);
}
