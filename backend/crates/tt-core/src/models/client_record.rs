use crate::ClientStatus;

use serde::{Serialize, Serializer};

/// One client/property file as listed on the search screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub id: String,
    pub client_name: String,
    pub property_address: String,
    /// Serialized as a string (`"2024"`), the shape the records have always had.
    #[serde(serialize_with = "serialize_tax_year")]
    pub tax_year: u16,
    pub status: ClientStatus,
}

fn serialize_tax_year<S>(year: &u16, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(year)
}
