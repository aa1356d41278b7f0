use crate::{DocumentStatus, SignatureBook};

#[test]
fn test_serialized_document_carries_requires_signature() {
    let book = SignatureBook::default();
    let json = serde_json::to_value(&book.all()[0]).unwrap();

    assert_eq!(json["documentName"], "Property Tax Appeal Form - John Smith");
    assert_eq!(json["status"], "Pending Signature");
    assert_eq!(json["requiresSignature"], true);
    assert_eq!(json["dateCreated"], "2024-01-10");
}

#[test]
fn test_requires_signature_follows_status() {
    let mut document = SignatureBook::default().all()[0].clone();
    assert!(document.requires_signature());

    document.status = DocumentStatus::Signed;
    assert!(!document.requires_signature());
}
