//! Landing page with the primary search box.

use leptos::prelude::*;

use crate::components::search_form::SearchForm;

const FEATURES: [(&str, &str); 3] = [
    ("Find Products", "Search from thousands of products from top retailers"),
    ("Earn Commissions", "Get paid when people buy through your unique links"),
    ("Support Charities", "Part of your earnings go to a charity of your choice"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let query = RwSignal::new(String::new());

    view! {
        <div class="home-page">
            <div class="home-page__hero">
                <h1>"Find what you're looking for"</h1>
                <p>"Search for products and earn commissions through our affiliate program"</p>
            </div>
            <SearchForm query=query large=true/>
            <div class="home-page__features">
                {FEATURES
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="home-page__feature">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
