//! Top bar with brand link, search link and session-aware account actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every route. Shows dashboard + logout for a signed-in user,
//! login + register otherwise.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::{AppSession, SessionState};
use crate::util::location::{DASHBOARD_PATH, HOME_PATH, LOGIN_PATH, REGISTER_PATH, SEARCH_PATH};

/// Site-wide navigation bar.
#[component]
pub fn Toolbar() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let state = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = move || state.get().user.map(|u| u.email).unwrap_or_default();

    let on_logout = move |_| {
        session.logout();
        navigate(HOME_PATH, NavigateOptions::default());
    };

    view! {
        <header class="toolbar">
            <A href=HOME_PATH attr:class="toolbar__brand">"AffiliateSearch"</A>
            <A href=SEARCH_PATH attr:class="toolbar__link">"Search"</A>
            <span class="toolbar__spacer"></span>
            <Show
                when=move || state.get().is_authenticated()
                fallback=|| {
                    view! {
                        <A href=LOGIN_PATH attr:class="toolbar__link">"Login"</A>
                        <A href=REGISTER_PATH attr:class="btn toolbar__register">"Register"</A>
                    }
                }
            >
                <A href=DASHBOARD_PATH attr:class="toolbar__link">"Dashboard"</A>
                <span class="toolbar__self">{email}</span>
                <button class="btn toolbar__logout" on:click=on_logout.clone() title="Logout">
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
