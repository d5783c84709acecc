//! Startup and serve errors for the host binary.

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
