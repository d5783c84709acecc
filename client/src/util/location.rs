//! Route paths and query-string handling.
//!
//! The location's `q` parameter is the single source of truth for the active
//! search: forms write it via navigation, the search page reads it back.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

pub const HOME_PATH: &str = "/";
pub const SEARCH_PATH: &str = "/search";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Query-string parameter carrying the search text.
pub const QUERY_PARAM: &str = "q";

/// Detail route for a product.
pub fn product_path(id: &str) -> String {
    format!("/product/{}", urlencoding::encode(id))
}

/// Search route for an already-normalized query.
pub fn search_href(query: &str) -> String {
    let encoded = form_urlencoded::Serializer::new(String::new()).append_pair(QUERY_PARAM, query).finish();
    format!("{SEARCH_PATH}?{encoded}")
}

/// Pull a non-empty `q` value out of a location query string.
///
/// A leading `?` is accepted. The first `q` wins.
pub fn extract_query(search: &str) -> Option<String> {
    let raw = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(raw.as_bytes())
        .find(|(key, _)| key == QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.trim().is_empty())
}

/// Trim a submitted search box value; `None` means ignore the submission.
pub fn normalize_submission(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Query to search for after the location's query string changed from
/// `previous` to `current`. Unchanged strings never search twice.
pub fn next_search(previous: Option<&str>, current: &str) -> Option<String> {
    if previous == Some(current) {
        return None;
    }
    extract_query(current)
}
