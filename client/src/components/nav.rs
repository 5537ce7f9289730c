//! Top navigation links.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::{HOME_ROUTE, LOGIN_ROUTE, REGISTER_ROUTE};

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <ul class="nav">
            <li>
                <A href=HOME_ROUTE>"Home"</A>
            </li>
            <li>
                <A href=LOGIN_ROUTE>"Login"</A>
            </li>
            <li>
                <A href=REGISTER_ROUTE>"Register"</A>
            </li>
        </ul>
    }
}
