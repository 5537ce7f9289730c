use super::*;
use crate::net::types::User;

#[test]
fn login_mode_posts_to_login() {
    assert_eq!(AuthMode::Login.endpoint(), "/login");
    assert_eq!(AuthMode::Login.title(), "Login");
    assert_eq!(AuthMode::Login.submit_label(), "LOGIN");
}

#[test]
fn register_mode_posts_to_register() {
    assert_eq!(AuthMode::Register.endpoint(), "/register");
    assert_eq!(AuthMode::Register.title(), "Sign up");
    assert_eq!(AuthMode::Register.submit_label(), "REGISTER");
}

#[test]
fn form_status_defaults_to_idle() {
    assert_eq!(FormStatus::default(), FormStatus::Idle);
    assert!(!FormStatus::Idle.is_loading());
    assert!(FormStatus::Loading.is_loading());
}

#[test]
fn failed_submit_leaves_session_unchanged() {
    let owner = Owner::new();
    owner.set();

    let mut existing = SessionState::default();
    existing.apply_auth(AuthResponse {
        user: User { id: Some("u1".to_owned()), email: "a@b.com".to_owned() },
        access_token: "tok".to_owned(),
    });
    let session = RwSignal::new(existing.clone());

    // Off the browser the API reports `Unavailable`, which takes the failure path.
    for mode in [AuthMode::Login, AuthMode::Register] {
        let applied = futures::executor::block_on(submit_credentials(
            mode,
            Credentials::new("x@y.com", "secret"),
            session,
        ));
        assert!(!applied);
        assert_eq!(session.get_untracked(), existing);
    }
}
