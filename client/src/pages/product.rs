//! Product detail page.
//!
//! There is no product-by-id endpoint; the page reads the product from the
//! current search results, which also hold a product resumed after login.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::net::types::Product;
use crate::state::search::SearchState;
use crate::state::session::SessionState;
use crate::util::location::{LOGIN_PATH, SEARCH_PATH, search_href};

#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let results = expect_context::<RwSignal<SearchState>>();
    let session_state = expect_context::<RwSignal<SessionState>>();

    let product = move || {
        let id = params.with(|p| p.get("id"))?;
        results.with(|s| s.find(&id).cloned())
    };

    let back_href = move || {
        let query = results.with(|s| s.query.clone());
        if query.is_empty() { SEARCH_PATH.to_owned() } else { search_href(&query) }
    };

    view! {
        <div class="product-page">
            <A href=back_href attr:class="product-page__back">"← Back to results"</A>
            {move || match product() {
                Some(product) => view! { <ProductDetail product=product session_state=session_state/> }.into_any(),
                None => view! { <p class="product-page__missing">"Product not found."</p> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProductDetail(product: Product, session_state: RwSignal<SessionState>) -> impl IntoView {
    let price = product.display_price();
    let source = format!("From {}", product.source);
    let affiliate_url = product.affiliate_url.clone();

    view! {
        <article class="product-detail">
            {product.image_url.clone().map(|src| view! { <img class="product-detail__image" src=src alt=product.title.clone()/> })}
            <h1 class="product-detail__title">{product.title.clone()}</h1>
            <p class="product-detail__description">{product.description.clone()}</p>
            <div class="product-detail__meta">
                <span class="product-detail__price">{price}</span>
                <span class="product-detail__source">{source}</span>
            </div>
            {match affiliate_url {
                Some(url) => view! {
                    <a class="btn product-detail__visit" href=url target="_blank" rel="noopener noreferrer sponsored">
                        "Visit store"
                    </a>
                }
                .into_any(),
                None => view! {
                    <Show when=move || !session_state.with(SessionState::is_authenticated)>
                        <p class="product-detail__hint">
                            <A href=LOGIN_PATH>"Sign in"</A>
                            " to get your affiliate link."
                        </p>
                    </Show>
                }
                .into_any(),
            }}
        </article>
    }
}
