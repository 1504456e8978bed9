//! OpenAI Whisper transcription service adapter
//!
//! Implements the TranscriptionServicePort for OpenAI's audio API.
//! Single multipart request carrying the file, the model and a language hint.

use crate::error::{AppError, Result};
use crate::ports::transcription::{
    TranscriptionConfig, TranscriptionResult, TranscriptionServicePort,
};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "whisper-1";

/// OpenAI Whisper service implementation
pub struct OpenAIWhisperService {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIWhisperService {
    /// Create a new service against `base_url` with the given API key
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/audio/transcriptions", self.base_url)
    }

    fn build_form(
        &self,
        audio: Vec<u8>,
        file_name: String,
        config: &TranscriptionConfig,
    ) -> Form {
        let model = config
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let mut form = Form::new()
            .part("file", Part::bytes(audio).file_name(file_name))
            .text("model", model);

        if let Some(language) = &config.language {
            form = form.text("language", language.clone());
        }

        form
    }
}

#[async_trait]
impl TranscriptionServicePort for OpenAIWhisperService {
    async fn transcribe_file(
        &self,
        audio_path: &Path,
        config: &TranscriptionConfig,
    ) -> Result<TranscriptionResult> {
        if !self.is_configured() {
            return Err(AppError::Transcription(
                "OpenAI API key is not configured".to_string(),
            ));
        }

        log::info!("Transcribing with OpenAI: {}", audio_path.display());

        let audio = tokio::fs::read(audio_path)
            .await
            .map_err(|e| AppError::Transcription(format!("Failed to read audio file: {}", e)))?;
        let file_name = audio_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "audio".to_string());

        log::debug!("Audio file size: {} bytes", audio.len());

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .multipart(self.build_form(audio, file_name, config))
            .send()
            .await
            .map_err(|e| {
                log::error!("OpenAI HTTP request failed: {}", e);
                AppError::Transcription(format!("OpenAI request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("OpenAI API error ({}): {}", status, error_text);
            return Err(AppError::Transcription(format!(
                "OpenAI API error ({}): {}",
                status, error_text
            )));
        }

        let body: TranscriptionResponse = response.json().await.map_err(|e| {
            AppError::Transcription(format!("Failed to parse OpenAI response: {}", e))
        })?;

        let result = TranscriptionResult {
            text: body.text.unwrap_or_default(),
        };
        log::info!("OpenAI transcription complete: {} chars", result.text.len());

        Ok(result)
    }

    fn provider_name(&self) -> &'static str {
        "OpenAI"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

// ===== API Response Types =====

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: Option<String>,
}
