use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.site_root, None);
}

#[test]
fn site_root_override_is_trimmed() {
    let cfg = ServerConfig::from_lookup(lookup(&[("SITE_ROOT", " /srv/site ")])).unwrap();
    assert_eq!(cfg.site_root.as_deref(), Some("/srv/site"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("BIND_ADDR", "")])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".into()));
}

#[test]
fn rejects_bad_bind_addr() {
    let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost:1")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBindAddr("localhost:1".into()));
}
