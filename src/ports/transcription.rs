/// Transcription service port trait
///
/// Defines the interface for ASR (Automatic Speech Recognition) services.
/// Implementations: OpenAI Whisper
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Represents a transcription result
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranscriptionResult {
    /// Full transcript text, empty when the provider returned none
    pub text: String,
}

/// Configuration for transcription request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranscriptionConfig {
    /// Provider model name (e.g., "whisper-1")
    pub model: Option<String>,

    /// Language code hint (e.g., "ko", "en")
    pub language: Option<String>,
}

/// Port trait for transcription services (ASR)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptionServicePort: Send + Sync {
    /// Transcribe audio from a file on disk
    async fn transcribe_file(
        &self,
        audio_path: &Path,
        config: &TranscriptionConfig,
    ) -> Result<TranscriptionResult>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;

    /// Check if the service is configured (has API key)
    fn is_configured(&self) -> bool;
}
