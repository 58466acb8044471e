use super::*;

#[test]
fn select_params_cover_order_filter_and_limit() {
    let query = Query::new("*,profiles(full_name,email)")
        .order("created_at", Direction::Desc)
        .eq("published", "true")
        .limit(4);
    assert_eq!(
        select_params(&query),
        vec![
            ("select", "*,profiles(full_name,email)".to_owned()),
            ("order", "created_at.desc".to_owned()),
            ("published", "eq.true".to_owned()),
            ("limit", "4".to_owned()),
        ]
    );
}

#[test]
fn select_params_minimal_query() {
    assert_eq!(select_params(&Query::new("*")), vec![("select", "*".to_owned())]);
}

#[test]
fn id_filter_targets_primary_key() {
    let [(column, value)] = id_filter(Uuid::nil());
    assert_eq!(column, "id");
    assert_eq!(value, "eq.00000000-0000-0000-0000-000000000000");
}

#[test]
fn error_message_prefers_known_keys() {
    assert_eq!(
        error_message(400, r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#),
        "Invalid login credentials"
    );
    assert_eq!(error_message(409, r#"{"message":"duplicate key value"}"#), "duplicate key value");
    assert_eq!(error_message(422, r#"{"msg":"Password should be at least 6 characters"}"#), "Password should be at least 6 characters");
}

#[test]
fn error_message_falls_back_to_status() {
    assert_eq!(error_message(502, "<html>bad gateway</html>"), "request failed with status 502");
}

#[test]
fn recovery_fragment_yields_access_token() {
    assert_eq!(
        token_from_fragment("#access_token=abc.def&expires_in=3600&type=recovery"),
        Some("abc.def".to_owned())
    );
    assert_eq!(token_from_fragment("#type=recovery"), None);
    assert_eq!(token_from_fragment(""), None);
    assert_eq!(token_from_fragment("#access_token="), None);
}

#[test]
fn token_response_maps_to_session() {
    let resp: TokenResponse = serde_json::from_value(serde_json::json!({
        "access_token": "jwt",
        "token_type": "bearer",
        "user": {"id": "00000000-0000-0000-0000-000000000000", "email": "a@b.co"}
    }))
    .expect("token response");
    let session = Session::from(resp);
    assert_eq!(session.access_token, "jwt");
    assert_eq!(session.email, "a@b.co");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_backend_is_unavailable() {
    let backend = RestBackend::new(BackendConfig::local());
    let result = futures::executor::block_on(backend.select(Table::Profiles, &Query::new("*")));
    assert_eq!(result, Err(BackendError::Unavailable));
}
