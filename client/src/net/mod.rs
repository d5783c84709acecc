//! Networking modules for the affiliate REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls behind the `AffiliateApi` trait and `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;
