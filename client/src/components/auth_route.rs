//! Route guard for the protected landing view.
//!
//! The render decision and the redirect effect both read [`gate`]; the effect
//! handles navigation while the view shows a placeholder until it lands.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::auth::{Gate, gate, install_unauth_redirect};
use crate::util::clock;

#[component]
pub fn AuthRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    move || match session.with(|state| gate(state, clock::now_secs())) {
        Gate::Waiting => view! { <p class="status">"Please wait"</p> }.into_any(),
        Gate::Granted => children().into_any(),
        Gate::Denied => view! { <p class="status">"Loading"</p> }.into_any(),
    }
}
