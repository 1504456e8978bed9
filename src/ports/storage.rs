/// Storage port trait
///
/// Defines the interface for the meeting minutes document.
/// Implementation: JSON file adapter
use crate::domain::models::MeetingRecord;
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for minutes storage operations
///
/// Records are addressed by their position in insertion order.
#[async_trait]
pub trait MinutesStorePort: Send + Sync {
    /// Append a record, creating the document if needed
    async fn append(&self, record: MeetingRecord) -> Result<MeetingRecord>;

    /// List all records in insertion order
    async fn list(&self) -> Result<Vec<MeetingRecord>>;

    /// Replace the record at `index` wholesale
    ///
    /// Fails with `NotFound` when no document exists yet and with
    /// `InvalidIndex` when `index` is outside `0..len`.
    async fn update_at(&self, index: i64, record: MeetingRecord) -> Result<MeetingRecord>;
}
