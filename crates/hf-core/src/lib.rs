pub mod error;
pub mod events;
pub mod hookfeed;
pub mod normalize;
pub mod payload;
pub mod store;
pub mod timestamp;

pub mod types;

pub use crate::error::HookError;
pub use crate::hookfeed::{Hookfeed, IngestOutcome};
pub use crate::store::Store;
