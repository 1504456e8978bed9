//! Mock implementations for testing

use crate::domain::models::MeetingRecord;
use crate::error::{AppError, Result};
use crate::ports::{
    MinutesStorePort, TranscriptionConfig, TranscriptionResult, TranscriptionServicePort,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory minutes store
///
/// `None` stands in for a document that was never written.
#[derive(Clone, Default)]
pub struct MockMinutesStore {
    records: Arc<Mutex<Option<Vec<MeetingRecord>>>>,
    fail_writes: bool,
}

impl MockMinutesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every write fails with an IO error
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only store",
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl MinutesStorePort for MockMinutesStore {
    async fn append(&self, record: MeetingRecord) -> Result<MeetingRecord> {
        self.check_writable()?;
        self.records
            .lock()
            .unwrap()
            .get_or_insert_with(Vec::new)
            .push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<MeetingRecord>> {
        Ok(self.records.lock().unwrap().clone().unwrap_or_default())
    }

    async fn update_at(&self, index: i64, record: MeetingRecord) -> Result<MeetingRecord> {
        let mut guard = self.records.lock().unwrap();
        let records = guard
            .as_mut()
            .ok_or_else(|| AppError::NotFound("no minutes stored".to_string()))?;
        let slot = usize::try_from(index)
            .ok()
            .and_then(|i| records.get_mut(i))
            .ok_or(AppError::InvalidIndex(index))?;
        self.check_writable()?;
        *slot = record.clone();
        Ok(record)
    }
}

/// Transcription service that answers with a canned outcome
#[derive(Clone)]
pub struct MockTranscription {
    outcome: std::result::Result<String, String>,
    seen_paths: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockTranscription {
    pub fn returning(text: &str) -> Self {
        Self {
            outcome: Ok(text.to_string()),
            seen_paths: Arc::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            seen_paths: Arc::default(),
        }
    }

    /// Paths handed to `transcribe_file`, in call order
    pub fn seen_paths(&self) -> Vec<PathBuf> {
        self.seen_paths.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranscriptionServicePort for MockTranscription {
    async fn transcribe_file(
        &self,
        audio_path: &Path,
        _config: &TranscriptionConfig,
    ) -> Result<TranscriptionResult> {
        self.seen_paths
            .lock()
            .unwrap()
            .push(audio_path.to_path_buf());
        match &self.outcome {
            Ok(text) => Ok(TranscriptionResult { text: text.clone() }),
            Err(message) => Err(AppError::Transcription(message.clone())),
        }
    }

    fn provider_name(&self) -> &'static str {
        "Mock"
    }

    fn is_configured(&self) -> bool {
        true
    }
}
