use futures::executor::block_on;

use super::*;
use crate::state::session::PENDING_SELECTION_KEY;
use crate::test_support::{FakeApi, product};
use crate::util::storage::{MemoryStore, load_json};

fn logged_in(api: &FakeApi, store: &MemoryStore) -> SessionManager<FakeApi, MemoryStore> {
    let session = SessionManager::new(api.clone(), store.clone());
    assert!(block_on(session.login("a@b.com", "pw")));
    session
}

// =============================================================
// SearchState
// =============================================================

#[test]
fn default_state_is_idle() {
    let state = SearchState::default();
    assert_eq!(state.view(), ResultsView::Idle);
    assert!(state.error.is_none());
}

#[test]
fn zero_results_render_no_results_not_error() {
    let api = FakeApi::new();
    api.set_search_result("zzz", Ok(Vec::new()));
    let search = SearchController::new(api);

    block_on(search.search("zzz", None));

    let state = search.snapshot();
    assert_eq!(state.view(), ResultsView::NoResults);
    assert!(state.error.is_none());
}

#[test]
fn successful_search_replaces_products() {
    let api = FakeApi::new();
    api.set_search_result("broom", Ok(vec![product("p1", "amazon"), product("p2", "walmart")]));
    let search = SearchController::new(api);

    block_on(search.search("broom", None));

    let state = search.snapshot();
    assert_eq!(state.view(), ResultsView::Results);
    assert_eq!(state.query, "broom");
    assert_eq!(state.products.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), vec!["p1", "p2"]);
}

#[test]
fn failed_search_keeps_previous_results_and_sets_error() {
    let api = FakeApi::new();
    api.set_search_result("broom", Ok(vec![product("p1", "amazon")]));
    api.set_search_result("mop", Err(ApiError::Status(500)));
    let search = SearchController::new(api);

    block_on(search.search("broom", None));
    block_on(search.search("mop", None));

    let state = search.snapshot();
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(SEARCH_FAILED_MESSAGE));
    assert_eq!(state.products, vec![product("p1", "amazon")]);
}

#[test]
fn new_search_clears_previous_error() {
    let api = FakeApi::new();
    api.set_search_result("mop", Err(ApiError::Network("offline".to_owned())));
    let search = SearchController::new(api);

    block_on(search.search("mop", None));
    let ticket = search.begin("broom");

    let state = search.snapshot();
    assert_eq!(state.view(), ResultsView::Loading);
    assert!(state.error.is_none());
    assert!(search.finish(ticket, Ok(Vec::new())));
}

#[test]
fn superseded_response_is_dropped() {
    let search = SearchController::new(FakeApi::new());
    let older = search.begin("shoes");
    let newer = search.begin("hats");

    assert!(search.finish(newer, Ok(vec![product("hat", "amazon")])));
    assert!(!search.finish(older, Ok(vec![product("shoe", "amazon")])));

    let state = search.snapshot();
    assert_eq!(state.query, "hats");
    assert_eq!(state.products, vec![product("hat", "amazon")]);
    assert!(!state.loading);
}

#[test]
fn superseded_response_does_not_clear_loading() {
    let search = SearchController::new(FakeApi::new());
    let older = search.begin("shoes");
    let _newer = search.begin("hats");

    assert!(!search.finish(older, Err(ApiError::Status(500))));

    let state = search.snapshot();
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn endpoint_variant_follows_credential() {
    let api = FakeApi::new();
    let search = SearchController::new(api.clone());

    block_on(search.search("broom", None));
    block_on(search.search("broom", Some(BearerToken::new("t1"))));

    assert_eq!(
        api.searches(),
        vec![("broom".to_owned(), None), ("broom".to_owned(), Some("t1".to_owned()))]
    );
}

// =============================================================
// selection
// =============================================================

#[test]
fn logged_out_selection_stashes_product_and_redirects() {
    let api = FakeApi::new();
    let store = MemoryStore::new();
    let session = SessionManager::new(api.clone(), store.clone());
    let search = SearchController::new(api.clone());
    let picked = product("p1", "amazon");

    let dest = block_on(search.select(&session, &picked));

    assert_eq!(dest, "/login");
    assert_eq!(load_json::<Product>(&store, PENDING_SELECTION_KEY), Some(picked));
    assert!(api.clicks().is_empty());
}

#[test]
fn logged_in_selection_records_click_and_navigates() {
    let api = FakeApi::new().with_account("a@b.com", "pw");
    let store = MemoryStore::new();
    let session = logged_in(&api, &store);
    let search = SearchController::new(api.clone());

    let dest = block_on(search.select(&session, &product("p7", "walmart")));

    assert_eq!(dest, "/product/p7");
    let clicks = api.clicks();
    assert_eq!(clicks.len(), 1);
    assert_eq!(clicks[0].0, FakeApi::token_for("a@b.com"));
    assert_eq!(
        clicks[0].1,
        ClickRequest { product_id: "p7".to_owned(), affiliate_network: "walmart".to_owned() }
    );
}

#[test]
fn click_failure_still_navigates() {
    let api = FakeApi::new().with_account("a@b.com", "pw");
    api.fail_clicks();
    let store = MemoryStore::new();
    let session = logged_in(&api, &store);
    let search = SearchController::new(api.clone());

    let dest = block_on(search.select(&session, &product("p7", "walmart")));

    assert_eq!(dest, "/product/p7");
    assert_eq!(api.clicks().len(), 1);
}

// =============================================================
// resume after login
// =============================================================

#[test]
fn resume_without_pending_selection_goes_to_dashboard() {
    let api = FakeApi::new().with_account("a@b.com", "pw");
    let store = MemoryStore::new();
    let session = logged_in(&api, &store);
    let search = SearchController::new(api.clone());

    assert_eq!(block_on(search.resume_after_login(&session)), "/dashboard");
    assert!(api.clicks().is_empty());
}

#[test]
fn resume_consumes_pending_selection_once() {
    let api = FakeApi::new().with_account("a@b.com", "pw");
    let store = MemoryStore::new();
    let session = SessionManager::new(api.clone(), store.clone());
    let search = SearchController::new(api.clone());
    let picked = product("p3", "amazon");
    assert_eq!(block_on(search.select(&session, &picked)), "/login");

    assert!(block_on(session.login("a@b.com", "pw")));
    assert_eq!(block_on(search.resume_after_login(&session)), "/product/p3");
    assert_eq!(search.snapshot().find("p3"), Some(&picked));
    assert_eq!(store.get(PENDING_SELECTION_KEY), None);
    assert_eq!(api.clicks().len(), 1);

    assert_eq!(block_on(search.resume_after_login(&session)), "/dashboard");
}
