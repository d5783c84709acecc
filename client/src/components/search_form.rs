//! Search box shared by the home and search pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::util::location::{normalize_submission, search_href};

/// Text input + submit button. Submitting writes the query into the location
/// rather than searching directly; blank input is ignored.
#[component]
pub fn SearchForm(query: RwSignal<String>, #[prop(optional)] large: bool) -> impl IntoView {
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(normalized) = normalize_submission(&query.get_untracked()) {
            navigate(&search_href(&normalized), NavigateOptions::default());
        }
    };

    view! {
        <form class="search-form" class:search-form--large=large on:submit=on_submit>
            <input
                class="search-form__input"
                type="text"
                placeholder="What are you looking for today?"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <button class="search-form__button" type="submit">
                "Search"
            </button>
        </form>
    }
}
