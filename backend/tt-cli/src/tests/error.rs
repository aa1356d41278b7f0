use crate::CliError;

use tt_client::ClientError;
use tt_core::CoreError;
use tt_session::{SessionError, StoreError};

#[test]
fn test_rejected_login_prints_generic_message() {
    let err: CliError =
        SessionError::from_client(ClientError::api_error(401, "Invalid credentials.")).into();

    assert_eq!(err.user_message(), "Invalid username or password");
}

#[test]
fn test_network_failure_prints_distinct_message() {
    let err: CliError =
        SessionError::from_client(ClientError::token_source("connection refused")).into();

    let message = err.user_message();
    assert_ne!(message, "Invalid username or password");
    assert!(message.contains("Unable to reach the server"));
}

#[test]
fn test_missing_token_suggests_login() {
    let err: CliError = ClientError::missing_token().into();

    assert!(err.user_message().contains("taxtrack login"));
}

#[test]
fn test_storage_failure_keeps_detail() {
    let err: CliError = SessionError::from(StoreError::unavailable("disk gone")).into();

    assert!(err.user_message().contains("disk gone"));
}

#[test]
fn test_document_error_prints_id() {
    let err: CliError = CoreError::document_not_found("42").into();

    assert!(err.user_message().contains("42"));
}
