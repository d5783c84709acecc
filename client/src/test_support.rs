//! Fixtures and a scripted backend shared by unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::net::api::{AffiliateApi, ApiError, BearerToken};
use crate::net::types::{AffiliateStats, Charity, ClickRequest, Product, User};

pub fn product(id: &str, source: &str) -> Product {
    Product {
        id: id.to_owned(),
        title: format!("Broom {id}"),
        description: "Sweeps floors".to_owned(),
        price: 19.99,
        source: source.to_owned(),
        image_url: None,
        affiliate_url: None,
    }
}

pub fn user(email: &str) -> User {
    User { id: format!("id-{email}"), email: email.to_owned(), is_active: Some(true), created_at: None }
}

#[derive(Default)]
struct Script {
    accounts: HashMap<String, String>,
    revoked: bool,
    fail_register: bool,
    fail_clicks: bool,
    search_results: HashMap<String, Result<Vec<Product>, ApiError>>,
    calls: Vec<String>,
    searches: Vec<(String, Option<String>)>,
    clicks: Vec<(String, ClickRequest)>,
}

/// In-memory backend that records every call it receives.
#[derive(Clone, Default)]
pub struct FakeApi {
    script: Arc<Mutex<Script>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(self, email: &str, password: &str) -> Self {
        self.lock().accounts.insert(email.to_owned(), password.to_owned());
        self
    }

    /// Make `/auth/me` reject every token from now on.
    pub fn revoke_tokens(&self) {
        self.lock().revoked = true;
    }

    pub fn fail_registration(&self) {
        self.lock().fail_register = true;
    }

    pub fn fail_clicks(&self) {
        self.lock().fail_clicks = true;
    }

    pub fn set_search_result(&self, query: &str, result: Result<Vec<Product>, ApiError>) {
        self.lock().search_results.insert(query.to_owned(), result);
    }

    /// Names of the endpoints hit, in order.
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    /// `(query, token)` for each search.
    pub fn searches(&self) -> Vec<(String, Option<String>)> {
        self.lock().searches.clone()
    }

    /// `(token, click)` for each click attempt.
    pub fn clicks(&self) -> Vec<(String, ClickRequest)> {
        self.lock().clicks.clone()
    }

    pub fn token_for(email: &str) -> String {
        format!("token-{email}")
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, call: &str) {
        self.lock().calls.push(call.to_owned());
    }
}

#[async_trait(?Send)]
impl AffiliateApi for FakeApi {
    async fn request_token(&self, email: &str, password: &str) -> Result<BearerToken, ApiError> {
        self.record("token");
        let script = self.lock();
        match script.accounts.get(email) {
            Some(expected) if expected == password => Ok(BearerToken::new(Self::token_for(email))),
            _ => Err(ApiError::Status(401)),
        }
    }

    async fn register(&self, email: &str, password: &str) -> Result<(), ApiError> {
        self.record("register");
        let mut script = self.lock();
        if script.fail_register || script.accounts.contains_key(email) {
            return Err(ApiError::Status(400));
        }
        script.accounts.insert(email.to_owned(), password.to_owned());
        Ok(())
    }

    async fn current_user(&self, token: &BearerToken) -> Result<User, ApiError> {
        self.record("me");
        let script = self.lock();
        if script.revoked {
            return Err(ApiError::Status(401));
        }
        script
            .accounts
            .keys()
            .find(|email| Self::token_for(email) == token.as_str())
            .map(|email| user(email))
            .ok_or(ApiError::Status(401))
    }

    async fn search_products(&self, query: &str, token: Option<&BearerToken>) -> Result<Vec<Product>, ApiError> {
        self.record("search");
        let mut script = self.lock();
        script.searches.push((query.to_owned(), token.map(|t| t.as_str().to_owned())));
        script.search_results.get(query).cloned().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn record_click(&self, token: &BearerToken, click: &ClickRequest) -> Result<(), ApiError> {
        self.record("click");
        let mut script = self.lock();
        script.clicks.push((token.as_str().to_owned(), click.clone()));
        if script.fail_clicks { Err(ApiError::Network("connection reset".to_owned())) } else { Ok(()) }
    }

    async fn affiliate_stats(&self, _token: &BearerToken) -> Result<AffiliateStats, ApiError> {
        self.record("stats");
        Ok(AffiliateStats { click_count: 2, ..AffiliateStats::default() })
    }

    async fn charities(&self) -> Result<Vec<Charity>, ApiError> {
        self.record("charities");
        Ok(Vec::new())
    }
}
