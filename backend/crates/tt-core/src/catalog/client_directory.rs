use crate::ClientRecord;
use crate::catalog::{filter_by_query, seed};

/// Client/property files the office is tracking.
#[derive(Debug, Clone)]
pub struct ClientDirectory {
    records: Vec<ClientRecord>,
}

impl Default for ClientDirectory {
    fn default() -> Self {
        Self::new(seed::client_records())
    }
}

impl ClientDirectory {
    pub fn new(records: Vec<ClientRecord>) -> Self {
        Self { records }
    }

    pub fn all(&self) -> &[ClientRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose client name or property address contains `query`.
    pub fn search(&self, query: &str) -> Vec<&ClientRecord> {
        filter_by_query(&self.records, query, |record| {
            [record.client_name.as_str(), record.property_address.as_str()]
        })
    }
}
