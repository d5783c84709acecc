//! Dashboard page with affiliate earnings and charities.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the session-gated route. It redirects to `/login` once the
//! startup identity check finished without a user, and loads stats and the
//! charity list once per mount.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::{AffiliateApi, BearerToken};
use crate::net::types::{AffiliateStats, Charity};
use crate::state::session::{AppSession, SessionState};
use crate::util::auth::install_unauth_redirect;

pub(crate) const STATS_FAILED_MESSAGE: &str = "Could not load your earnings.";

/// Everything the dashboard shows besides the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    pub stats: Option<AffiliateStats>,
    pub charities: Vec<Charity>,
    pub error: Option<String>,
}

/// Fetch stats (needs a credential) and charities (public). Charity failures
/// just leave the list empty.
pub async fn load_dashboard<A: AffiliateApi>(api: &A, token: Option<&BearerToken>) -> DashboardData {
    let mut data = DashboardData::default();
    match token {
        Some(token) => match api.affiliate_stats(token).await {
            Ok(stats) => data.stats = Some(stats),
            Err(e) => {
                log::error!("loading affiliate stats failed: {e}");
                data.error = Some(STATS_FAILED_MESSAGE.to_owned());
            }
        },
        None => data.error = Some(STATS_FAILED_MESSAGE.to_owned()),
    }
    match api.charities().await {
        Ok(charities) => data.charities = charities,
        Err(e) => log::warn!("loading charities failed: {e}"),
    }
    data
}

/// Format a currency amount for display.
pub(crate) fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}

fn spawn_load(session: AppSession, data: RwSignal<Option<DashboardData>>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let token = session.authenticated_credential();
        let loaded = load_dashboard(session.api(), token.as_ref()).await;
        data.set(Some(loaded));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, data);
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let state = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(state, use_navigate());

    let data = RwSignal::new(None::<DashboardData>);
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get_untracked() || !state.with(SessionState::is_authenticated) {
            return;
        }
        requested.set(true);
        spawn_load(session.clone(), data);
    });

    let email = move || state.get().user.map(|u| u.email).unwrap_or_default();

    view! {
        <Show
            when=move || state.with(SessionState::is_authenticated)
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if state.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <h1 class="dashboard-page__title">"Dashboard"</h1>
                <p class="dashboard-page__self">"Signed in as " {email}</p>
                <Show
                    when=move || data.with(Option::is_some)
                    fallback=move || view! { <p>"Loading your earnings..."</p> }
                >
                    <DashboardBody data=Signal::derive(move || data.get().unwrap_or_default())/>
                </Show>
            </div>
        </Show>
    }
}

#[component]
fn DashboardBody(data: Signal<DashboardData>) -> impl IntoView {
    view! {
        <Show when=move || data.with(|d| d.error.is_some())>
            <p class="dashboard-page__error">{move || data.get().error.unwrap_or_default()}</p>
        </Show>
        {move || {
            data.get()
                .stats
                .map(|stats| {
                    view! {
                        <div class="dashboard-page__stats">
                            <div class="stat-tile">
                                <span class="stat-tile__label">"Clicks"</span>
                                <span class="stat-tile__value">{stats.click_count}</span>
                            </div>
                            <div class="stat-tile">
                                <span class="stat-tile__label">"Purchases"</span>
                                <span class="stat-tile__value">{stats.transaction_count}</span>
                            </div>
                            <div class="stat-tile">
                                <span class="stat-tile__label">"Earnings"</span>
                                <span class="stat-tile__value">{format_amount(stats.total_earnings)}</span>
                            </div>
                            <div class="stat-tile">
                                <span class="stat-tile__label">"Donated"</span>
                                <span class="stat-tile__value">
                                    {format_amount(stats.total_charity_donation)}
                                </span>
                            </div>
                        </div>
                    }
                })
        }}
        <h2 class="dashboard-page__subtitle">"Charities"</h2>
        <ul class="dashboard-page__charities">
            {move || {
                data.get()
                    .charities
                    .into_iter()
                    .map(|charity| {
                        view! {
                            <li class="charity">
                                <a href=charity.website target="_blank" rel="noopener noreferrer">
                                    {charity.name}
                                </a>
                                <p>{charity.description}</p>
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}
