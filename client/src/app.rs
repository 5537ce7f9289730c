//! Root application component with routing and the session context.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{auth_route::AuthRoute, nav::Nav};
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::session::SessionState;

pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";
pub const REGISTER_ROUTE: &str = "/register";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, kicks off the one-shot session restore and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::booting());
    provide_context(session);

    // Runs once per page load; later session writes do not re-trigger it.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::util::auth::restore_session(session));

    view! {
        <Title text="Session Gate"/>

        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("") view=ProtectedHome/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn ProtectedHome() -> impl IntoView {
    view! {
        <AuthRoute>
            <HomePage/>
        </AuthRoute>
    }
}
