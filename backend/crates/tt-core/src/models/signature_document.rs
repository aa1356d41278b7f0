use crate::DocumentStatus;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// A document awaiting (or carrying) a client signature.
///
/// Whether a signature is still required is derived from `status`, so the
/// two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureDocument {
    pub id: String,
    pub document_name: String,
    pub client: String,
    pub property: String,
    pub date_created: NaiveDate,
    pub status: DocumentStatus,
}

impl SignatureDocument {
    pub fn requires_signature(&self) -> bool {
        self.status.requires_signature()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignatureDocumentView<'a> {
    id: &'a str,
    document_name: &'a str,
    client: &'a str,
    property: &'a str,
    date_created: NaiveDate,
    status: DocumentStatus,
    requires_signature: bool,
}

impl Serialize for SignatureDocument {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SignatureDocumentView {
            id: &self.id,
            document_name: &self.document_name,
            client: &self.client,
            property: &self.property,
            date_created: self.date_created,
            status: self.status,
            requires_signature: self.requires_signature(),
        }
        .serialize(serializer)
    }
}
