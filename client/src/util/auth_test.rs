use super::*;
use crate::net::types::{AuthResponse, User};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

const NOW: f64 = 1_700_000_000.0;

fn state_with_token(token: &str, refreshing: bool) -> SessionState {
    let mut state = SessionState { refreshing, ..SessionState::default() };
    state.apply_auth(AuthResponse {
        user: User { id: None, email: "a@b.com".to_owned() },
        access_token: token.to_owned(),
    });
    state
}

fn token_expiring_at(exp: f64) -> String {
    let payload = serde_json::json!({ "iat": NOW - 60.0, "exp": exp }).to_string();
    format!("e30.{}.sig", URL_SAFE_NO_PAD.encode(payload))
}

#[test]
fn gate_waits_while_refreshing() {
    assert_eq!(gate(&SessionState::booting(), NOW), Gate::Waiting);
    assert_eq!(gate(&state_with_token(&token_expiring_at(NOW + 60.0), true), NOW), Gate::Waiting);
}

#[test]
fn gate_grants_live_token() {
    assert_eq!(gate(&state_with_token(&token_expiring_at(NOW + 60.0), false), NOW), Gate::Granted);
}

#[test]
fn gate_denies_expired_token() {
    assert_eq!(gate(&state_with_token(&token_expiring_at(NOW - 60.0), false), NOW), Gate::Denied);
}

#[test]
fn gate_denies_malformed_token() {
    assert_eq!(gate(&state_with_token("definitely.not.ajwt", false), NOW), Gate::Denied);
}

#[test]
fn should_redirect_unauth_when_settled_without_token() {
    let mut state = SessionState::booting();
    state.finish_refresh();
    assert!(should_redirect_unauth(&state, NOW));
}

#[test]
fn should_not_redirect_while_refreshing() {
    assert!(!should_redirect_unauth(&SessionState::booting(), NOW));
}

#[test]
fn should_not_redirect_with_live_token() {
    assert!(!should_redirect_unauth(&state_with_token(&token_expiring_at(NOW + 1.0), false), NOW));
}

#[test]
fn should_redirect_once_token_expires() {
    let state = state_with_token(&token_expiring_at(NOW + 30.0), false);
    assert!(!should_redirect_unauth(&state, NOW));
    assert!(should_redirect_unauth(&state, NOW + 30.0));
}

// =============================================================
// restore_session
// =============================================================

#[test]
fn restore_session_failure_settles_with_empty_session() {
    let owner = Owner::new();
    owner.set();
    let session = RwSignal::new(SessionState::booting());

    // Off the browser the refresh call reports `Unavailable`.
    futures::executor::block_on(restore_session(session));

    let settled = session.get_untracked();
    assert_eq!(settled.session, crate::state::session::Session::default());
    assert!(!settled.refreshing);
    assert_eq!(gate(&settled, NOW), Gate::Denied);
}

#[test]
fn restore_session_keeps_held_token_and_settles() {
    let owner = Owner::new();
    owner.set();
    let mut held = SessionState::booting();
    held.apply_refresh("held".to_owned());
    let session = RwSignal::new(held);

    futures::executor::block_on(restore_session(session));

    let settled = session.get_untracked();
    assert_eq!(settled.access_token(), Some("held"));
    assert!(settled.user().is_none());
    assert!(!settled.refreshing);
}
