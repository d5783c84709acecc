//! Product search and selection flow.
//!
//! DESIGN
//! ======
//! Each search takes a [`SearchTicket`] carrying a sequence number. Only the
//! most recently issued ticket may write results, so an older request that
//! resolves late cannot overwrite a newer one.
//!
//! Selection either parks the product for after login or records an
//! affiliate click and returns the detail route. Click failures never block
//! navigation.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::prelude::*;

use crate::net::api::{AffiliateApi, ApiError, BearerToken, HttpApi};
use crate::net::types::{ClickRequest, Product};
use crate::state::session::SessionManager;
use crate::util::location::{DASHBOARD_PATH, LOGIN_PATH, product_path};
use crate::util::storage::KeyValueStore;

pub const SEARCH_FAILED_MESSAGE: &str = "Failed to search products. Please try again.";

/// What the results area should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultsView {
    /// No search has run yet.
    Idle,
    Loading,
    NoResults,
    Results,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    /// Query of the latest issued search.
    pub query: String,
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
    /// Whether any search has completed.
    pub searched: bool,
    /// Sequence number of the latest issued search.
    pub seq: u64,
}

impl SearchState {
    #[must_use]
    pub fn view(&self) -> ResultsView {
        if self.loading {
            ResultsView::Loading
        } else if !self.searched {
            ResultsView::Idle
        } else if self.products.is_empty() {
            ResultsView::NoResults
        } else {
            ResultsView::Results
        }
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

/// Permission for one search to write its outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// The search controller used by the running app.
pub type AppSearch = SearchController<HttpApi>;

#[derive(Clone)]
pub struct SearchController<A> {
    api: A,
    state: ArcRwSignal<SearchState>,
}

impl<A: AffiliateApi> SearchController<A> {
    pub fn new(api: A) -> Self {
        Self { api, state: ArcRwSignal::new(SearchState::default()) }
    }

    pub fn state(&self) -> ArcRwSignal<SearchState> {
        self.state.clone()
    }

    pub fn snapshot(&self) -> SearchState {
        self.state.get_untracked()
    }

    /// Enter `loading` for `query` and issue a fresh ticket.
    pub fn begin(&self, query: &str) -> SearchTicket {
        let mut ticket = SearchTicket(0);
        self.state.update(|s| {
            s.seq += 1;
            s.query = query.to_owned();
            s.loading = true;
            s.error = None;
            ticket = SearchTicket(s.seq);
        });
        ticket
    }

    /// Apply a search outcome. Returns `false` when the ticket was superseded
    /// and the outcome was dropped.
    pub fn finish(&self, ticket: SearchTicket, outcome: Result<Vec<Product>, ApiError>) -> bool {
        if self.state.with_untracked(|s| s.seq) != ticket.0 {
            log::debug!("dropping superseded search response #{}", ticket.0);
            return false;
        }
        self.state.update(|s| {
            match outcome {
                Ok(products) => {
                    s.products = products;
                    s.searched = true;
                }
                Err(e) => {
                    log::error!("search failed: {e}");
                    s.error = Some(SEARCH_FAILED_MESSAGE.to_owned());
                }
            }
            s.loading = false;
        });
        true
    }

    /// Run a search. `token` is the session credential when a user is
    /// signed in, which switches to the authenticated endpoint.
    pub async fn search(&self, query: &str, token: Option<BearerToken>) {
        let ticket = self.begin(query);
        let outcome = self.api.search_products(query, token.as_ref()).await;
        self.finish(ticket, outcome);
    }

    /// Handle a click on a result and return the route to navigate to.
    pub async fn select<SA, S>(&self, session: &SessionManager<SA, S>, product: &Product) -> String
    where
        SA: AffiliateApi,
        S: KeyValueStore,
    {
        let Some(token) = session.authenticated_credential() else {
            session.stash_pending_selection(product);
            return LOGIN_PATH.to_owned();
        };
        if let Err(e) = self.api.record_click(&token, &ClickRequest::from(product)).await {
            log::error!("failed to record click for {}: {e}", product.id);
        }
        product_path(&product.id)
    }

    /// Route to land on after a successful login or registration. A product
    /// parked while logged out is consumed and selected now.
    pub async fn resume_after_login<SA, S>(&self, session: &SessionManager<SA, S>) -> String
    where
        SA: AffiliateApi,
        S: KeyValueStore,
    {
        let Some(product) = session.take_pending_selection() else {
            return DASHBOARD_PATH.to_owned();
        };
        if !self.state.with_untracked(|s| s.find(&product.id).is_some()) {
            self.state.update(|s| s.products.push(product.clone()));
        }
        self.select(session, &product).await
    }
}
