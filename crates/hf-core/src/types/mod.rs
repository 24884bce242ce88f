pub mod event;
pub mod ids;

pub use event::{Action, EventRecord, NewEventRecord};
pub use ids::{EventId, IdError};
