//! Card component for one product search result.
//!
//! DESIGN
//! ======
//! The card only renders and reports clicks; the search page decides whether
//! a click records an affiliate event or redirects to login.

use leptos::prelude::*;

use crate::net::types::Product;

/// A clickable card representing a product.
#[component]
pub fn ProductCard(product: Product, on_select: Callback<Product>) -> impl IntoView {
    let price = product.display_price();
    let source = format!("From {}", product.source);
    let title = product.title.clone();
    let description = product.description.clone();
    let image = product.image_url.clone();

    view! {
        <div
            class="product-card"
            role="button"
            on:click=move |_| on_select.run(product.clone())
        >
            <div class="product-card__image">
                {match image {
                    Some(src) => view! { <img src=src alt=title.clone()/> }.into_any(),
                    None => view! { <span>"Product Image"</span> }.into_any(),
                }}
            </div>
            <div class="product-card__body">
                <h3 class="product-card__title">{title}</h3>
                <p class="product-card__description">{description}</p>
                <div class="product-card__footer">
                    <span class="product-card__price">{price}</span>
                    <span class="product-card__source">{source}</span>
                </div>
            </div>
        </div>
    }
}
