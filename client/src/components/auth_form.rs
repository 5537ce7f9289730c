//! Email + password form shared by the login and signup pages.
//!
//! DESIGN
//! ======
//! The form has two states, idle and loading. The submit button stays
//! enabled while a request is in flight, so repeated submits race and the
//! last response to land wins. Failures are logged to the console only.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::{ApiError, AuthResponse, Credentials};
use crate::state::session::SessionState;

/// Which auth service endpoint a form posts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Login => api::LOGIN_PATH,
            Self::Register => api::REGISTER_PATH,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Sign up",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "LOGIN",
            Self::Register => "REGISTER",
        }
    }

    async fn submit(self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        match self {
            Self::Login => api::login(credentials).await,
            Self::Register => api::register(credentials).await,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
}

impl FormStatus {
    pub fn is_loading(self) -> bool {
        self == Self::Loading
    }
}

/// Post `credentials` for `mode` and fold the outcome into `session`.
///
/// Returns `true` when the session was replaced.
pub async fn submit_credentials(mode: AuthMode, credentials: Credentials, session: RwSignal<SessionState>) -> bool {
    let outcome = mode.submit(&credentials).await;
    let mut applied = Ok(());
    session.maybe_update(|state| {
        applied = state.apply_auth_result(outcome);
        applied.is_ok()
    });
    match applied {
        Ok(()) => true,
        Err(e) => {
            log::error!("{} failed: {e}", mode.endpoint());
            false
        }
    }
}

#[component]
pub fn AuthForm(mode: AuthMode) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials::new(email.get_untracked(), password.get_untracked());
        status.set(FormStatus::Loading);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if submit_credentials(mode, credentials, session).await {
                    navigate(crate::app::HOME_ROUTE, leptos_router::NavigateOptions::default());
                }
                status.set(FormStatus::Idle);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, session, &navigate);
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h2 class="auth-form__title">{mode.title()}</h2>
            <label class="auth-form__field">
                "Email:"
                <input
                    type="text"
                    placeholder="enter your email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-form__field">
                "Password:"
                <input
                    type="password"
                    placeholder="enter your password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <br/>
            <button class="auth-form__submit" type="submit">
                {mode.submit_label()}
            </button>
            <Show when=move || status.get().is_loading()>
                <p class="auth-form__status">"Please wait"</p>
            </Show>
        </form>
    }
}
