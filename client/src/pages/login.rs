//! Login page with email + password.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shares form validation and the post-auth flow with the register page. A
//! successful sign-in resumes a product picked while logged out, or lands
//! on the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::AffiliateApi;
use crate::state::search::{AppSearch, SearchController};
use crate::state::session::{AppSession, SessionManager};
use crate::util::location::REGISTER_PATH;
use crate::util::storage::KeyValueStore;

pub(crate) const MISSING_FIELDS_MESSAGE: &str = "Enter both email and password.";
pub(crate) const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password.";
pub(crate) const REGISTER_FAILED_MESSAGE: &str = "Registration failed. Try a different email.";

/// Which credential operation a form submits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    Register,
}

impl AuthAction {
    pub(crate) fn failure_message(self) -> &'static str {
        match self {
            Self::Login => LOGIN_FAILED_MESSAGE,
            Self::Register => REGISTER_FAILED_MESSAGE,
        }
    }
}

/// Trim the email and require both fields. The password is kept verbatim.
pub(crate) fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Run the credential operation and decide where to go next.
///
/// A token alone is not enough: if the identity check behind it failed the
/// session is already logged out, so this reports the failure message
/// instead of resuming the pending selection.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) async fn run_auth_flow<A, S>(
    action: AuthAction,
    session: &SessionManager<A, S>,
    search: &SearchController<A>,
    email: &str,
    password: &str,
) -> Result<String, &'static str>
where
    A: AffiliateApi,
    S: KeyValueStore,
{
    let ok = match action {
        AuthAction::Login => session.login(email, password).await,
        AuthAction::Register => session.register(email, password).await,
    };
    if !ok || !session.snapshot().is_authenticated() {
        return Err(action.failure_message());
    }
    Ok(search.resume_after_login(session).await)
}

/// Submit credentials in the background; navigate on success, otherwise
/// show the failure message and re-enable the form.
#[allow(clippy::too_many_arguments)]
pub(crate) fn spawn_auth_flow<N>(
    action: AuthAction,
    session: AppSession,
    search: AppSearch,
    navigate: N,
    email: String,
    password: String,
    info: RwSignal<String>,
    busy: RwSignal<bool>,
) where
    N: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match run_auth_flow(action, &session, &search, &email, &password).await {
            Ok(dest) => {
                info.set(String::new());
                busy.set(false);
                navigate(&dest, NavigateOptions::default());
            }
            Err(msg) => {
                info.set(msg.to_owned());
                busy.set(false);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (action, session, search, navigate, email, password, info, busy);
    }
}

/// Form shared by login and register.
#[component]
pub fn CredentialsForm(action: AuthAction) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let search = expect_context::<AppSearch>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match validate_credentials(&email.get_untracked(), &password.get_untracked()) {
            Err(msg) => info.set(msg.to_owned()),
            Ok((email_value, password_value)) => {
                busy.set(true);
                info.set(String::new());
                spawn_auth_flow(
                    action,
                    session.clone(),
                    search.clone(),
                    navigate.clone(),
                    email_value,
                    password_value,
                    info,
                    busy,
                );
            }
        }
    };

    let submit_label = match action {
        AuthAction::Login => "Sign In",
        AuthAction::Register => "Create Account",
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <input
                class="login-input"
                type="email"
                placeholder="you@example.com"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                class="login-input"
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button class="login-button" type="submit" disabled=move || busy.get()>
                {submit_label}
            </button>
        </form>
        <Show when=move || !info.get().is_empty()>
            <p class="login-message">{move || info.get()}</p>
        </Show>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign In"</h1>
                <p class="login-card__subtitle">"Earn commissions on everything you find."</p>
                <CredentialsForm action=AuthAction::Login/>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "No account yet? "
                    <A href=REGISTER_PATH>"Register"</A>
                </p>
            </div>
        </div>
    }
}
