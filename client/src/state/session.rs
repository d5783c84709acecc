//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one [`SessionManager`], runs [`SessionManager::initialize`]
//! once per tab load and provides the manager plus its state signal through
//! context. Route guards, the header and the search flow read the signal;
//! pages call the manager to log in, register or log out.
//!
//! INVARIANTS
//! ==========
//! - `user` is `Some` only after `/auth/me` succeeded for the current token.
//! - A failed identity fetch logs the session out.
//! - The token hits storage only after `/auth/token` succeeds.
//! - Logout is local: no request is made.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::{AffiliateApi, BearerToken, HttpApi};
use crate::net::types::{Product, User};
use crate::util::storage::{BrowserStorage, KeyValueStore, load_json, save_json};

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON product picked while logged out.
pub const PENDING_SELECTION_KEY: &str = "selectedProduct";

/// Authentication state tracking the credential, current user and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    /// True until the startup identity check finishes.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { token: None, user: None, loading: true }
    }
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    fn replace_token(&mut self, token: Option<String>) {
        if self.token != token {
            self.user = None;
        }
        self.token = token;
    }
}

/// The session store used by the running app.
pub type AppSession = SessionManager<HttpApi, BrowserStorage>;

/// Owns [`SessionState`] and the operations that mutate it.
#[derive(Clone)]
pub struct SessionManager<A, S> {
    api: A,
    store: S,
    state: ArcRwSignal<SessionState>,
}

impl<A, S> SessionManager<A, S>
where
    A: AffiliateApi,
    S: KeyValueStore,
{
    pub fn new(api: A, store: S) -> Self {
        Self { api, store, state: ArcRwSignal::new(SessionState::default()) }
    }

    /// Backend used by this session, for pages that call it directly.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Reactive handle to the session state.
    pub fn state(&self) -> ArcRwSignal<SessionState> {
        self.state.clone()
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// The current token, whether or not the user has been resolved yet.
    pub fn credential(&self) -> Option<BearerToken> {
        self.state.with_untracked(|s| s.token.clone()).map(BearerToken::new)
    }

    /// The current token, but only once a user is attached to it.
    pub fn authenticated_credential(&self) -> Option<BearerToken> {
        self.state
            .with_untracked(|s| if s.user.is_some() { s.token.clone() } else { None })
            .map(BearerToken::new)
    }

    /// Startup sequence: hydrate the stored token, resolve its user, then
    /// clear `loading` whatever the outcome.
    pub async fn initialize(&self) {
        let stored = self.store.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let has_token = stored.is_some();
        self.state.update(|s| s.replace_token(stored));
        if has_token {
            self.fetch_current_user().await;
        }
        self.state.update(|s| s.loading = false);
    }

    /// Exchange credentials for a token and resolve the user.
    ///
    /// Returns whether the token request succeeded; a later identity failure
    /// logs out but does not change the result.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let token = match self.api.request_token(email, password).await {
            Ok(token) => token,
            Err(e) => {
                log::error!("login failed: {e}");
                return false;
            }
        };
        self.store.set(TOKEN_KEY, token.as_str());
        self.state.update(|s| s.replace_token(Some(token.as_str().to_owned())));
        self.fetch_current_user().await;
        true
    }

    /// Create an account and log straight into it.
    pub async fn register(&self, email: &str, password: &str) -> bool {
        if let Err(e) = self.api.register(email, password).await {
            log::error!("registration failed: {e}");
            return false;
        }
        self.login(email, password).await
    }

    /// Resolve the user behind the current token, logging out on failure.
    pub async fn fetch_current_user(&self) -> Option<User> {
        let Some(token) = self.credential() else {
            self.logout();
            return None;
        };
        match self.api.current_user(&token).await {
            Ok(user) => {
                let still_current = self.state.with_untracked(|s| s.token.as_deref() == Some(token.as_str()));
                if !still_current {
                    return None;
                }
                self.state.update(|s| s.user = Some(user.clone()));
                Some(user)
            }
            Err(e) => {
                if e.is_auth_failure() {
                    log::warn!("stored credential rejected: {e}");
                } else {
                    log::error!("fetching current user failed: {e}");
                }
                self.logout();
                None
            }
        }
    }

    /// Forget the token and user.
    pub fn logout(&self) {
        self.store.remove(TOKEN_KEY);
        self.state.update(|s| {
            s.token = None;
            s.user = None;
        });
    }

    /// Remember a product picked while logged out.
    pub fn stash_pending_selection(&self, product: &Product) {
        save_json(&self.store, PENDING_SELECTION_KEY, product);
    }

    /// Read and clear the product picked while logged out.
    pub fn take_pending_selection(&self) -> Option<Product> {
        let product = load_json(&self.store, PENDING_SELECTION_KEY);
        self.store.remove(PENDING_SELECTION_KEY);
        product
    }
}
