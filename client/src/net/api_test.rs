use super::*;

#[test]
fn search_endpoint_depends_on_authentication() {
    assert_eq!(search_endpoint(true), "/search/products");
    assert_eq!(search_endpoint(false), "/search/public/products");
}

#[test]
fn token_form_body_uses_username_field_for_email() {
    assert_eq!(token_form_body("a@b.com", "hunter2"), "username=a%40b.com&password=hunter2");
}

#[test]
fn token_form_body_escapes_reserved_characters() {
    assert_eq!(token_form_body("x", "p&ss word"), "username=x&password=p%26ss+word");
}

#[test]
fn bearer_header_value_has_scheme_prefix() {
    assert_eq!(BearerToken::new("abc").header_value(), "Bearer abc");
}

#[test]
fn bearer_debug_hides_token() {
    assert_eq!(format!("{:?}", BearerToken::new("secret")), "BearerToken(***)");
}

#[test]
fn auth_failure_covers_unauthorized_and_forbidden() {
    assert!(ApiError::Status(401).is_auth_failure());
    assert!(ApiError::Status(403).is_auth_failure());
    assert!(!ApiError::Status(500).is_auth_failure());
    assert!(!ApiError::Network("offline".to_owned()).is_auth_failure());
}

#[test]
fn api_error_messages() {
    assert_eq!(ApiError::Status(422).to_string(), "request failed with status 422");
    assert_eq!(ApiError::Unavailable.to_string(), "not available outside the browser");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_api_is_unavailable_off_the_browser() {
    let api = HttpApi::new(ApiConfig::from_raw(Some("http://api.test")));
    let result = futures::executor::block_on(api.charities());
    assert_eq!(result, Err(ApiError::Unavailable));
}
