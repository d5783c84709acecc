//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and result cards while reading shared
//! session state from Leptos context providers.

pub mod product_card;
pub mod search_form;
pub mod toolbar;
