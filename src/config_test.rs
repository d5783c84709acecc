use super::*;

#[test]
fn port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None).ok(), Some(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")).ok(), Some(DEFAULT_PORT));
}

#[test]
fn port_parses_trimmed_value() {
    assert_eq!(parse_port(Some(" 8080 ")).ok(), Some(8080));
}

#[test]
fn invalid_port_is_rejected() {
    let err = parse_port(Some("eighty")).expect_err("non-numeric port should fail");
    assert_eq!(err.to_string(), "invalid PORT value: eighty");
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn site_root_ignores_blank_values() {
    assert_eq!(parse_site_root(None), None);
    assert_eq!(parse_site_root(Some(" ")), None);
    assert_eq!(parse_site_root(Some("/srv/site")), Some(PathBuf::from("/srv/site")));
}

#[test]
fn bind_addr_listens_on_all_interfaces() {
    let config = HostConfig { port: 4000, site_root: None };
    assert_eq!(config.bind_addr().to_string(), "0.0.0.0:4000");
}
