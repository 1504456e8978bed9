/// Domain layer - core business models
///
/// These models are transport-agnostic and represent core business entities.
pub mod models;

pub use models::{split_attendees, MeetingRecord, UploadedAudio};
