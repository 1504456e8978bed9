//! Audio file utilities for storing uploads
//!
//! Uploaded audio is written under the upload directory with a generated
//! name and is never removed afterwards.

use crate::domain::models::UploadedAudio;
use crate::error::Result;
use std::path::Path;

/// Save uploaded audio bytes under `upload_dir`
///
/// # Arguments
/// * `upload_dir` - Directory receiving the file, must already exist
/// * `original_filename` - Client-supplied name, only its extension is kept
/// * `data` - Full file content
///
/// # Returns
/// The stored upload with its generated id and path
pub async fn save_upload(
    upload_dir: &Path,
    original_filename: &str,
    data: &[u8],
) -> Result<UploadedAudio> {
    let upload = UploadedAudio::new(upload_dir, original_filename);

    tokio::fs::write(&upload.path, data).await?;

    log::info!(
        "Saved {} bytes of uploaded audio to {}",
        data.len(),
        upload.path.display()
    );
    Ok(upload)
}

/// Ensure the upload directory exists
pub async fn prepare_upload_dir(upload_dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(upload_dir).await?;
    Ok(())
}
