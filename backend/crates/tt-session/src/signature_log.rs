use crate::{KeyValueStore, SessionError, SessionResult};

use std::sync::Arc;

use tokio::sync::Mutex;
use tt_core::SignatureBook;

pub const SIGNED_DOCUMENTS_KEY: &str = "signed_documents";

/// Remembers which documents were signed on this device.
///
/// Survives logout; it records device-side signatures, not session state.
#[derive(Clone)]
pub struct SignatureLog {
    store: Arc<dyn KeyValueStore>,
    /// Held across the read-modify-write in [`record`](Self::record).
    record_lock: Arc<Mutex<()>>,
}

impl SignatureLog {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            record_lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn signed_ids(&self) -> SessionResult<Vec<String>> {
        match self.store.get(SIGNED_DOCUMENTS_KEY).await? {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| SessionError::corrupt_session(e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    pub async fn record(&self, id: &str) -> SessionResult<()> {
        let _guard = self.record_lock.lock().await;

        let mut ids = self.signed_ids().await?;
        if ids.iter().any(|existing| existing == id) {
            return Ok(());
        }
        ids.push(id.to_string());

        let json =
            serde_json::to_string(&ids).map_err(|e| SessionError::corrupt_session(e.to_string()))?;
        self.store.set(SIGNED_DOCUMENTS_KEY, json).await?;
        Ok(())
    }

    /// The seeded signature book with recorded signatures replayed onto it.
    pub async fn load_book(&self) -> SessionResult<SignatureBook> {
        let mut book = SignatureBook::default();
        book.apply_signed(self.signed_ids().await?);
        Ok(book)
    }

    /// Sign a document and record it.
    pub async fn sign(&self, book: &mut SignatureBook, id: &str) -> SessionResult<()> {
        book.sign(id)?;
        self.record(id).await
    }
}
