use crate::{LoginResponse, SessionToken, User};

#[test]
fn test_display_name_joins_names() {
    let user = User::new("Jane", "Doe");
    assert_eq!(user.display_name(), "Jane Doe");
}

#[test]
fn test_display_name_skips_blank_half() {
    assert_eq!(User::new("Jane", " ").display_name(), "Jane");
    assert_eq!(User::new("", "Doe").display_name(), "Doe");
}

#[test]
fn test_user_json_uses_snake_case() {
    let json = serde_json::to_value(User::new("Jane", "Doe")).unwrap();
    assert_eq!(json["first_name"], "Jane");
    assert_eq!(json["last_name"], "Doe");
}

#[test]
fn test_login_response_deserializes() {
    let body = r#"{"token":"abc123","user":{"first_name":"Jane","last_name":"Doe"}}"#;
    let response: LoginResponse = serde_json::from_str(body).unwrap();

    assert_eq!(response.token.as_str(), "abc123");
    assert_eq!(response.user, User::new("Jane", "Doe"));
}

#[test]
fn test_login_response_without_token_is_rejected() {
    let body = r#"{"user":{"first_name":"Jane","last_name":"Doe"}}"#;
    assert!(serde_json::from_str::<LoginResponse>(body).is_err());
}

#[test]
fn test_session_token_debug_is_redacted() {
    let token = SessionToken::new("super-secret");
    let debug = format!("{token:?}");
    assert!(!debug.contains("super-secret"));
}

#[test]
fn test_session_token_blank() {
    assert!(SessionToken::new("  ").is_blank());
    assert!(!SessionToken::new("t").is_blank());
}
