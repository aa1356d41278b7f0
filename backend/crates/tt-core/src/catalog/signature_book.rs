use crate::catalog::seed;
use crate::{CoreError, DocumentStatus, Result as CoreErrorResult, SignatureDocument};

use std::collections::HashSet;

/// Documents shown on the signature view, split into pending and signed.
///
/// Signing only changes local state; persisting which documents were signed
/// is up to the caller (see [`SignatureBook::apply_signed`]).
#[derive(Debug, Clone)]
pub struct SignatureBook {
    documents: Vec<SignatureDocument>,
}

impl Default for SignatureBook {
    fn default() -> Self {
        Self::new(seed::signature_documents())
    }
}

impl SignatureBook {
    pub fn new(documents: Vec<SignatureDocument>) -> Self {
        Self { documents }
    }

    pub fn all(&self) -> &[SignatureDocument] {
        &self.documents
    }

    pub fn pending(&self) -> Vec<&SignatureDocument> {
        self.documents
            .iter()
            .filter(|doc| doc.requires_signature())
            .collect()
    }

    pub fn signed(&self) -> Vec<&SignatureDocument> {
        self.documents
            .iter()
            .filter(|doc| !doc.requires_signature())
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&SignatureDocument> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    /// Marks a pending document as signed.
    #[track_caller]
    pub fn sign(&mut self, id: &str) -> CoreErrorResult<&SignatureDocument> {
        let document = self
            .documents
            .iter_mut()
            .find(|doc| doc.id == id)
            .ok_or_else(|| CoreError::document_not_found(id))?;

        if !document.requires_signature() {
            return Err(CoreError::document_already_signed(id));
        }

        document.status = DocumentStatus::Signed;
        Ok(document)
    }

    /// Replays previously recorded signatures.
    ///
    /// Unknown ids and documents that are already signed are skipped.
    /// Returns how many documents changed.
    pub fn apply_signed<I, S>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: HashSet<String> = ids.into_iter().map(|id| id.as_ref().to_string()).collect();

        let mut applied = 0;
        for document in self.documents.iter_mut() {
            if document.requires_signature() && ids.contains(&document.id) {
                document.status = DocumentStatus::Signed;
                applied += 1;
            }
        }
        applied
    }
}
