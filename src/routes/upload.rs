//! Audio upload endpoint
//!
//! Stores the uploaded file, then hands it to the transcription service.
//! The file stays on disk whatever the transcription outcome.

use crate::domain::UploadedAudio;
use crate::error::{AppError, Result};
use crate::ports::transcription::{TranscriptionConfig, TranscriptionServicePort};
use crate::routes::soft_failure;
use crate::state::AppState;
use crate::utils::audio_file::save_upload;
use axum::{
    body::Bytes,
    extract::{Multipart, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::path::Path;

const FILE_FIELD: &str = "file";

/// Outcome of storing and transcribing one upload
#[derive(Debug)]
pub struct UploadOutcome {
    pub audio: UploadedAudio,
    /// Transcript text, or the transcription failure
    pub transcript: Result<String>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    pub text: String,
    pub filename: String,
}

/// Store the upload and transcribe it
///
/// Only a failure to write the file is returned as `Err`; a transcription
/// failure is carried in the outcome.
pub async fn store_and_transcribe(
    upload_dir: &Path,
    transcription: &dyn TranscriptionServicePort,
    config: &TranscriptionConfig,
    original_filename: &str,
    data: &[u8],
) -> Result<UploadOutcome> {
    let audio = save_upload(upload_dir, original_filename, data).await?;

    let transcript = transcription
        .transcribe_file(&audio.path, config)
        .await
        .map(|result| result.text);

    match &transcript {
        Ok(text) => log::info!(
            "{} transcribed {} into {} chars",
            transcription.provider_name(),
            audio.path.display(),
            text.len()
        ),
        Err(e) => log::error!(
            "{} failed to transcribe {}: {}",
            transcription.provider_name(),
            audio.path.display(),
            e
        ),
    }

    Ok(UploadOutcome { audio, transcript })
}

/// Accept a multipart audio upload and return its transcript
pub async fn upload_audio(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response> {
    let (filename, data) = read_file_field(&mut multipart).await?;

    let outcome = store_and_transcribe(
        &state.upload_dir,
        state.transcription.as_ref(),
        &state.transcription_config,
        &filename,
        &data,
    )
    .await?;

    let response = match outcome.transcript {
        Ok(text) => Json(UploadResponse {
            message: "파일 업로드 및 변환 완료",
            text,
            filename: outcome.audio.display_path(),
        })
        .into_response(),
        Err(e) => soft_failure(state.strict_errors, e),
    };
    Ok(response)
}

async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Bytes)> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        return Ok((filename, data));
    }

    log::warn!("Upload rejected: no '{}' field", FILE_FIELD);
    Err(AppError::InvalidInput(format!(
        "missing multipart field '{}'",
        FILE_FIELD
    )))
}
