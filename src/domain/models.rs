/// Domain models for the minutes server
///
/// These models represent core business entities and are transport-agnostic.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Represents one meeting-minutes entry
///
/// `date` and `location` are free-form text; nothing parses them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeetingRecord {
    pub date: String,
    pub location: String,
    pub attendees: Vec<String>,
    pub content: String,
}

impl MeetingRecord {
    /// Creates a new record from already split attendees
    pub fn new(date: String, location: String, attendees: Vec<String>, content: String) -> Self {
        Self {
            date,
            location,
            attendees,
            content,
        }
    }

    /// Creates a new record from a comma-separated attendee list
    pub fn from_attendee_list(
        date: String,
        location: String,
        attendees: &str,
        content: String,
    ) -> Self {
        Self::new(date, location, split_attendees(attendees), content)
    }
}

/// Splits a comma-separated attendee list
///
/// Pieces are kept verbatim: no trimming, empty pieces included.
pub fn split_attendees(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

/// Represents an uploaded audio file stored on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedAudio {
    pub id: Uuid,
    pub extension: String,
    pub path: PathBuf,
}

impl UploadedAudio {
    /// Assigns a fresh id to an upload destined for `upload_dir`
    ///
    /// Any directory part of the client-supplied name is ignored so the
    /// extension can never carry a path separator.
    pub fn new(upload_dir: &Path, original_filename: &str) -> Self {
        let id = Uuid::new_v4();
        let base_name = original_filename
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(original_filename);
        let extension = Self::extension_of(base_name).to_string();
        let path = upload_dir.join(format!("{}.{}", id, extension));
        Self {
            id,
            extension,
            path,
        }
    }

    /// Last dot-delimited segment of a filename
    ///
    /// A name without any dot yields the whole name.
    pub fn extension_of(filename: &str) -> &str {
        filename.rsplit('.').next().unwrap_or(filename)
    }

    /// Path as a display string, the form returned to clients
    pub fn display_path(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}
