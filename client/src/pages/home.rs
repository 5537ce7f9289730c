//! Protected landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `AuthRoute`. A session restored through the refresh cookie
//! carries a token but no user, so the greeting must cope with a missing user.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::session::SessionState;

pub(crate) fn greeting(user: Option<&User>) -> String {
    match user {
        Some(user) => format!("Hello {}", user.email),
        None => "Hello".to_owned(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let text = move || session.with(|state| greeting(state.user()));

    view! { <h1>{text}</h1> }
}
