//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::toolbar::Toolbar;
use crate::net::api::HttpApi;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, product::ProductPage, register::RegisterPage,
    search::SearchPage,
};
use crate::state::search::{AppSearch, SearchController};
use crate::state::session::{AppSession, SessionManager, SessionState};
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

fn spawn_initialize(session: AppSession) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        session.initialize().await;
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Root application component.
///
/// Builds the session and search stores, provides them (and their state
/// signals) to the tree, and starts the one-time session initialization.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = HttpApi::default();
    let session: AppSession = SessionManager::new(api.clone(), BrowserStorage);
    let search: AppSearch = SearchController::new(api);

    provide_context(RwSignal::from(session.state()));
    provide_context(RwSignal::from(search.state()));
    provide_context(session.clone());
    provide_context(search);

    spawn_initialize(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/affiliate-search.css"/>
        <Title text="AffiliateSearch"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <ParentRoute path=StaticSegment("") view=SessionGate>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("search") view=SearchPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=(StaticSegment("product"), ParamSegment("id")) view=ProductPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Layout that holds every route back until the startup identity check has
/// finished, so session-dependent UI never flashes a logged-out state.
#[component]
fn SessionGate() -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();

    view! {
        <Show
            when=move || !state.with(|s| s.loading)
            fallback=|| view! { <p class="page__loading">"Loading..."</p> }
        >
            <Toolbar/>
            <main class="page">
                <Outlet/>
            </main>
        </Show>
    }
}
