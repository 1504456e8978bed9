/// Application state shared across HTTP handlers
use crate::adapters::services::asr::{build_asr_service, transcription_config};
use crate::adapters::storage::JsonFileStore;
use crate::auth::CredentialChecker;
use crate::config::AppConfig;
use crate::error::Result;
use crate::ports::{MinutesStorePort, TranscriptionConfig, TranscriptionServicePort};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<CredentialChecker>,
    pub minutes: Arc<dyn MinutesStorePort>,
    pub transcription: Arc<dyn TranscriptionServicePort>,
    pub transcription_config: TranscriptionConfig,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub strict_errors: bool,
}

impl AppState {
    /// Wire up the production adapters from configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            credentials: Arc::new(CredentialChecker::from_config(config)),
            minutes: Arc::new(JsonFileStore::new(config.minutes_path.clone())),
            transcription: build_asr_service(&config.asr)?,
            transcription_config: transcription_config(&config.asr),
            upload_dir: config.upload_dir.clone(),
            max_upload_bytes: config.max_upload_bytes,
            strict_errors: config.strict_errors,
        })
    }
}
