use super::*;

#[test]
fn resolve_trims_trailing_slash() {
    let config = BackendConfig::resolve(Some("https://abc.supabase.co/"), Some(" anon ")).expect("config");
    assert_eq!(config.url(), "https://abc.supabase.co");
    assert_eq!(config.anon_key(), "anon");
}

#[test]
fn resolve_requires_both_values() {
    assert_eq!(
        BackendConfig::resolve(None, Some("k")),
        Err(ConfigError::Missing("SAFARI_BACKEND_URL"))
    );
    assert_eq!(
        BackendConfig::resolve(Some("https://x.example"), Some("  ")),
        Err(ConfigError::Missing("SAFARI_BACKEND_ANON_KEY"))
    );
}

#[test]
fn resolve_rejects_url_without_scheme() {
    let err = BackendConfig::resolve(Some("abc.supabase.co"), Some("k")).expect_err("no scheme");
    assert_eq!(err, ConfigError::InvalidUrl("abc.supabase.co".to_owned()));
}

#[test]
fn endpoint_builders_share_base_url() {
    let config = BackendConfig::resolve(Some("https://abc.supabase.co"), Some("k")).expect("config");
    assert_eq!(config.rest_url("tour_packages"), "https://abc.supabase.co/rest/v1/tour_packages");
    assert_eq!(config.rpc_url("is_admin"), "https://abc.supabase.co/rest/v1/rpc/is_admin");
    assert_eq!(config.auth_url("recover"), "https://abc.supabase.co/auth/v1/recover");
}

#[test]
fn local_config_points_at_dev_stack() {
    assert_eq!(BackendConfig::local().url(), "http://127.0.0.1:54321");
}
