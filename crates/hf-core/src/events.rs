use crate::error::HookError;
use crate::types::{EventRecord, NewEventRecord};

pub const DEFAULT_LATEST_LIMIT: u32 = 20;

pub trait EventRepository {
    /// Persists the record under a freshly minted id. The only write path.
    fn append(&self, record: NewEventRecord) -> Result<EventRecord, HookError>;

    /// Newest first by `timestamp`; equal or missing timestamps fall back to
    /// most recently inserted first. Missing timestamps sort last.
    fn latest(&self, limit: u32) -> Result<Vec<EventRecord>, HookError>;
}
