/// JSON file storage adapter
///
/// Implements MinutesStorePort on top of a single pretty-printed JSON document.
/// The whole document is read on every operation and rewritten on every
/// mutation.
use crate::domain::models::MeetingRecord;
use crate::error::{AppError, Result};
use crate::ports::storage::MinutesStorePort;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// JSON file storage implementation
pub struct JsonFileStore {
    path: PathBuf,
    /// Held across read-modify-write so writers in this process never interleave
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store backed by the document at `path`
    ///
    /// Nothing is touched on disk until the first write.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    #[cfg(test)]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Load the document, `None` if it was never written
    async fn load(&self) -> Result<Option<Vec<MeetingRecord>>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Rewrite the document through a sibling temp file and rename
    async fn persist(&self, records: &[MeetingRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, json).await?;
        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&tmp_path).await {
                log::warn!(
                    "Failed to remove temp file {}: {}",
                    tmp_path.display(),
                    cleanup
                );
            }
            return Err(e.into());
        }

        log::debug!(
            "Wrote {} records to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl MinutesStorePort for JsonFileStore {
    async fn append(&self, record: MeetingRecord) -> Result<MeetingRecord> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load().await?.unwrap_or_default();
        records.push(record.clone());
        self.persist(&records).await?;

        log::info!("Appended minutes record #{}", records.len() - 1);
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<MeetingRecord>> {
        Ok(self.load().await?.unwrap_or_default())
    }

    async fn update_at(&self, index: i64, record: MeetingRecord) -> Result<MeetingRecord> {
        let _guard = self.write_lock.lock().await;

        let mut records = self
            .load()
            .await?
            .ok_or_else(|| AppError::NotFound("no minutes stored".to_string()))?;

        let slot = usize::try_from(index)
            .ok()
            .and_then(|i| records.get_mut(i))
            .ok_or(AppError::InvalidIndex(index))?;
        *slot = record.clone();

        self.persist(&records).await?;

        log::info!("Updated minutes record #{}", index);
        Ok(record)
    }
}
