//! Wire DTOs for the affiliate REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads. Optional fields default
//! so older or leaner backend responses still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Login email.
    pub email: String,
    /// Whether the account is active, if the backend reports it.
    #[serde(default)]
    pub is_active: Option<bool>,
    /// ISO 8601 creation timestamp, if the backend reports it.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A product search hit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Non-negative price in the store's currency.
    pub price: f64,
    /// Affiliate network the product comes from (e.g. `"amazon"`).
    pub source: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Tracked outbound link; only populated on the authenticated endpoint.
    #[serde(default)]
    pub affiliate_url: Option<String>,
}

impl Product {
    /// Price formatted for display, e.g. `$19.99`.
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price.max(0.0))
    }
}

/// Body of a successful `/auth/token` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// JSON credential pair for `/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Click-attribution event for `/affiliate/click`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickRequest {
    pub product_id: String,
    pub affiliate_network: String,
}

impl From<&Product> for ClickRequest {
    fn from(product: &Product) -> Self {
        Self { product_id: product.id.clone(), affiliate_network: product.source.clone() }
    }
}

/// Earnings summary from `/affiliate/stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AffiliateStats {
    #[serde(default)]
    pub click_count: u64,
    #[serde(default)]
    pub transaction_count: u64,
    #[serde(default)]
    pub total_earnings: f64,
    #[serde(default)]
    pub total_charity_donation: f64,
}

/// A charity users can direct part of their commission to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub website: String,
}
