use crate::ClientError;

#[test]
fn test_unauthorized_is_rejection() {
    let err = ClientError::api_error(401, "Invalid credentials");
    assert!(err.is_rejection());
    assert!(!err.is_transport());
    assert_eq!(err.status(), Some(401));
}

#[test]
fn test_bad_request_is_rejection() {
    assert!(ClientError::api_error(400, "missing field").is_rejection());
    assert!(ClientError::api_error(403, "forbidden").is_rejection());
}

#[test]
fn test_server_error_is_not_rejection() {
    let err = ClientError::api_error(500, "boom");
    assert!(!err.is_rejection());
}

#[test]
fn test_missing_token_has_no_status() {
    let err = ClientError::missing_token();
    assert_eq!(err.status(), None);
    assert!(err.to_string().contains("log in first"));
}

#[test]
fn test_json_error_converts() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: ClientError = json_err.into();
    assert!(matches!(err, ClientError::Json { .. }));
}

#[test]
fn test_api_error_display_includes_status() {
    let err = ClientError::api_error(502, "Bad Gateway");
    let message = err.to_string();
    assert!(message.contains("Bad Gateway"));
    assert!(message.contains("502"));
}
