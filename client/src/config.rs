//! Build-time client configuration.
//!
//! The API base URL is baked into the WASM bundle from `AFFILIATE_API_URL`
//! at compile time, since the browser has no process environment to read.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Where the REST backend lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Read `AFFILIATE_API_URL` as captured by the compiler, falling back to
    /// [`DEFAULT_API_URL`].
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("AFFILIATE_API_URL"))
    }

    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        let base = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_URL);
        Self { base_url: base.trim_end_matches('/').to_owned() }
    }

    /// Join an absolute endpoint path onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
