//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `search`) so pages depend on small
//! focused stores. Each store owns its reactive state and exposes the
//! operations that mutate it.

pub mod search;
pub mod session;
