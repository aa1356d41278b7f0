use crate::DocumentStatus;

use std::str::FromStr;

#[test]
fn test_pending_signature_requires_signature() {
    assert!(DocumentStatus::PendingSignature.requires_signature());
    assert!(!DocumentStatus::Signed.requires_signature());
}

#[test]
fn test_document_status_label_has_space() {
    assert_eq!(DocumentStatus::PendingSignature.as_str(), "Pending Signature");
    assert_eq!(
        serde_json::to_string(&DocumentStatus::PendingSignature).unwrap(),
        "\"Pending Signature\""
    );
}

#[test]
fn test_document_status_from_str() {
    assert_eq!(
        DocumentStatus::from_str("Pending Signature").unwrap(),
        DocumentStatus::PendingSignature
    );
    assert_eq!(
        DocumentStatus::from_str("signed").unwrap(),
        DocumentStatus::Signed
    );
    assert!(DocumentStatus::from_str("void").is_err());
}
