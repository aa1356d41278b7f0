use crate::{KeyValueStore, StoreError, StoreResult};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, warn};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

type Entries = BTreeMap<String, String>;

/// Key-value store kept as one JSON object in a file.
///
/// Every mutation rewrites the whole file with the atomic write pattern, so
/// a crash mid-write leaves the previous contents intact. A missing file is
/// an empty store. A corrupted file fails reads; the next mutation moves it
/// aside to `<name>.corrupted.<timestamp>` and starts over.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> StoreResult<Entries> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(StoreError::file_read(self.path.clone(), e)),
        };

        if contents.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&contents)
            .map_err(|e| StoreError::corrupted(self.path.clone(), e.to_string()))
    }

    /// Read for a mutation, moving a corrupted file out of the way first.
    async fn read_entries_for_update(&self) -> StoreResult<Entries> {
        match self.read_entries().await {
            Err(StoreError::Corrupted { message, .. }) => {
                warn!("Store file corrupted at {:?}: {message}", self.path);
                self.backup_corrupted().await?;
                Ok(Entries::new())
            }
            other => other,
        }
    }

    /// Writes entries using atomic write pattern.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    async fn write_entries(&self, entries: &Entries) -> StoreResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| StoreError::dir_creation(dir.to_path_buf(), e))?;
        }

        let temp_path = self.temp_path();
        let json = serde_json::to_string_pretty(entries)?;

        {
            let mut file = fs::File::create(&temp_path)
                .await
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .await
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .await
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StoreError::atomic_rename(temp_path, self.path.clone(), e));
        }

        debug!("Wrote {} key(s) to {:?}", entries.len(), self.path);
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("store.json"));
        self.path
            .with_file_name(format!("{file_name}.tmp.{}", std::process::id()))
    }

    /// Backs up a corrupted store file for debugging.
    ///
    /// Renames `<name>` to `<name>.corrupted.{timestamp}`.
    pub async fn backup_corrupted(&self) -> StoreResult<Option<PathBuf>> {
        if fs::metadata(&self.path).await.is_err() {
            return Ok(None);
        }

        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("store.json"));
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .path
            .with_file_name(format!("{file_name}.corrupted.{timestamp}"));

        fs::rename(&self.path, &backup_path)
            .await
            .map_err(StoreError::backup_failed)?;

        warn!("Backed up corrupted store to {backup_path:?}");
        Ok(Some(backup_path))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.read_entries().await?.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries_for_update().await?;
        entries.insert(key.to_string(), value);
        self.write_entries(&entries).await
    }

    async fn remove(&self, key: &str) -> StoreResult<bool> {
        Ok(self.remove_many(&[key]).await? > 0)
    }

    async fn set_many(&self, new_entries: Vec<(String, String)>) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries_for_update().await?;
        entries.extend(new_entries);
        self.write_entries(&entries).await
    }

    async fn remove_many(&self, keys: &[&str]) -> StoreResult<usize> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries_for_update().await?;

        let mut removed = 0;
        for key in keys {
            if entries.remove(*key).is_some() {
                removed += 1;
            }
        }

        // Nothing to forget, nothing to write.
        if removed > 0 {
            self.write_entries(&entries).await?;
        }

        Ok(removed)
    }
}
