pub(crate) mod file_store;
pub(crate) mod memory_store;

use crate::StoreResult;

use async_trait::async_trait;

/// String-keyed persistent store local to the device.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    async fn set(&self, key: &str, value: String) -> StoreResult<()>;

    /// Returns whether the key was present.
    async fn remove(&self, key: &str) -> StoreResult<bool>;

    /// Write several entries. Implementations should make this all-or-nothing.
    async fn set_many(&self, entries: Vec<(String, String)>) -> StoreResult<()> {
        for (key, value) in entries {
            self.set(&key, value).await?;
        }
        Ok(())
    }

    /// Remove several keys, returning how many were present.
    async fn remove_many(&self, keys: &[&str]) -> StoreResult<usize> {
        let mut removed = 0;
        for key in keys {
            if self.remove(key).await? {
                removed += 1;
            }
        }
        Ok(removed)
    }
}
