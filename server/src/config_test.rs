use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> =
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.site_dir.ends_with("client/dist"));
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = HostConfig::from_lookup(lookup(&[
        ("HOST", "127.0.0.1"),
        ("PORT", " 8080 "),
        ("SITE_DIR", "/srv/portfolio"),
    ]))
    .unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.site_dir, PathBuf::from("/srv/portfolio"));
}

#[test]
fn from_lookup_accepts_ipv6_host() {
    let cfg = HostConfig::from_lookup(lookup(&[("HOST", "::1"), ("PORT", "4000")])).unwrap();
    assert_eq!(cfg.addr().to_string(), "[::1]:4000");
}

#[test]
fn from_lookup_rejects_bad_port() {
    for raw in ["abc", "0", "70000", ""] {
        assert_eq!(
            HostConfig::from_lookup(lookup(&[("PORT", raw)])),
            Err(ConfigError::InvalidPort(raw.to_owned()))
        );
    }
}

#[test]
fn from_lookup_rejects_bad_host() {
    assert_eq!(
        HostConfig::from_lookup(lookup(&[("HOST", "localhost")])),
        Err(ConfigError::InvalidHost("localhost".to_owned()))
    );
}

#[test]
fn config_error_messages_include_value() {
    assert_eq!(
        ConfigError::InvalidPort("x".into()).to_string(),
        "invalid PORT 'x': expected an integer in 1..=65535"
    );
}
