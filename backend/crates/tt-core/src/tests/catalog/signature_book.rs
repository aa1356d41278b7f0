use crate::{CoreError, DocumentStatus, SignatureBook};

#[test]
fn test_seed_split_into_pending_and_signed() {
    let book = SignatureBook::default();
    assert_eq!(book.pending().len(), 3);
    assert_eq!(book.signed().len(), 3);
}

#[test]
fn test_sign_pending_document() {
    let mut book = SignatureBook::default();

    let signed = book.sign("1").unwrap();

    assert_eq!(signed.status, DocumentStatus::Signed);
    assert!(!signed.requires_signature());
    assert_eq!(book.pending().len(), 2);
    assert_eq!(book.signed().len(), 4);
}

#[test]
fn test_sign_already_signed_document_fails() {
    let mut book = SignatureBook::default();

    let result = book.sign("2");

    assert!(matches!(
        result,
        Err(CoreError::DocumentAlreadySigned { .. })
    ));
    assert_eq!(book.signed().len(), 3);
}

#[test]
fn test_sign_unknown_document_fails() {
    let mut book = SignatureBook::default();

    let result = book.sign("42");

    assert!(matches!(result, Err(CoreError::DocumentNotFound { .. })));
}

#[test]
fn test_find_returns_document() {
    let book = SignatureBook::default();
    let document = book.find("3").unwrap();
    assert_eq!(document.client, "Michael Brown");
    assert!(book.find("nope").is_none());
}

#[test]
fn test_apply_signed_skips_unknown_and_signed() {
    let mut book = SignatureBook::default();

    let applied = book.apply_signed(["1", "2", "99", "5"]);

    assert_eq!(applied, 2);
    assert!(book.pending().iter().all(|doc| doc.id == "3"));
}
