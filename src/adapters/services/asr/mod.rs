//! ASR (Automatic Speech Recognition) service adapters
//!
//! This module provides adapters for different ASR providers:
//! - OpenAI: Whisper over the multipart transcription endpoint

pub mod openai;

pub use openai::OpenAIWhisperService;

use crate::config::AsrSettings;
use crate::error::{AppError, Result};
use crate::ports::transcription::{TranscriptionConfig, TranscriptionServicePort};
use std::sync::Arc;

/// Build the configured ASR service
pub fn build_asr_service(settings: &AsrSettings) -> Result<Arc<dyn TranscriptionServicePort>> {
    let service: Arc<dyn TranscriptionServicePort> = match settings.provider.as_str() {
        "openai" => Arc::new(OpenAIWhisperService::new(
            settings.api_key.clone(),
            settings.base_url.clone(),
            settings.timeout,
        )?),
        other => {
            return Err(AppError::Config(format!("Unknown ASR provider: {}", other)));
        }
    };

    if !service.is_configured() {
        log::warn!(
            "{} transcription has no API key; uploads will report transcription errors",
            service.provider_name()
        );
    }

    Ok(service)
}

/// Per-request transcription settings derived from configuration
pub fn transcription_config(settings: &AsrSettings) -> TranscriptionConfig {
    TranscriptionConfig {
        model: Some(settings.model.clone()),
        language: Some(settings.language.clone()),
    }
}
