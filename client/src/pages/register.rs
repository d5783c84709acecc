//! Registration page. Creating an account signs straight in.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::pages::login::{AuthAction, CredentialsForm};
use crate::util::location::LOGIN_PATH;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create Account"</h1>
                <p class="login-card__subtitle">"Part of every commission can go to a charity you pick."</p>
                <CredentialsForm action=AuthAction::Register/>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <A href=LOGIN_PATH>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
