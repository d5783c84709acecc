//! Search results page.
//!
//! ARCHITECTURE
//! ============
//! The location's `q` parameter drives everything: an effect watches the
//! query string and runs one search per distinct value, so back/forward
//! navigation and shared links replay the right search. The form only
//! rewrites the location.
//!
//! Result clicks go through `SearchController::select`, which either parks
//! the product and sends the user to login or records the affiliate click.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::product_card::ProductCard;
use crate::components::search_form::SearchForm;
use crate::net::api::BearerToken;
use crate::net::types::Product;
use crate::state::search::{AppSearch, ResultsView, SearchState};
use crate::state::session::{AppSession, SessionState};
use crate::util::location::next_search;

fn spawn_search(search: AppSearch, query: String, token: Option<BearerToken>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        search.search(&query, token).await;
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (search, query, token);
    }
}

fn spawn_select<N>(search: AppSearch, session: AppSession, product: Product, navigate: N)
where
    N: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let dest = search.select(&session, &product).await;
        navigate(&dest, NavigateOptions::default());
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (search, session, product, navigate);
    }
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let session_state = expect_context::<RwSignal<SessionState>>();
    let search = expect_context::<AppSearch>();
    let results = expect_context::<RwSignal<SearchState>>();
    let location = use_location();
    let navigate = use_navigate();

    let query = RwSignal::new(results.get_untracked().query);

    let location_search = search.clone();
    let location_session = session.clone();
    Effect::new(move |previous: Option<String>| {
        let current = location.search.get();
        if let Some(q) = next_search(previous.as_deref(), &current) {
            query.set(q.clone());
            spawn_search(location_search.clone(), q, location_session.authenticated_credential());
        }
        current
    });

    let on_select = Callback::new(move |product: Product| {
        spawn_select(search.clone(), session.clone(), product, navigate.clone());
    });

    let status = move || results.with(SearchState::view);

    view! {
        <div class="search-page">
            <SearchForm query=query/>

            <Show when=move || status() == ResultsView::Loading>
                <p class="search-page__status">"Searching for products..."</p>
            </Show>

            <Show when=move || results.with(|s| s.error.is_some())>
                <div class="search-page__error">
                    {move || results.get().error.unwrap_or_default()}
                </div>
            </Show>

            <Show when=move || status() == ResultsView::NoResults>
                <p class="search-page__status">"No products found. Try a different search term."</p>
            </Show>

            <div class="search-page__grid">
                {move || {
                    results
                        .get()
                        .products
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product on_select=on_select/> })
                        .collect_view()
                }}
            </div>

            <Show when=move || {
                !session_state.with(SessionState::is_authenticated)
                    && results.with(|s| !s.products.is_empty())
            }>
                <div class="search-page__signin-hint">
                    "Sign in to earn commissions on these products!"
                </div>
            </Show>
        </div>
    }
}
