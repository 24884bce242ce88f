use crate::error::HookError;
use crate::events::EventRepository;
use crate::normalize::normalize;
use crate::store::Store;
use crate::types::EventRecord;
use serde_json::Value;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    Stored(EventRecord),
    Ignored,
}

pub struct Hookfeed<S: Store> {
    store: S,
}

impl<S: Store> Hookfeed<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn events(&self) -> EventsApi<'_, S> {
        EventsApi { core: self }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

pub struct EventsApi<'a, S: Store> {
    core: &'a Hookfeed<S>,
}

impl<'a, S: Store> EventsApi<'a, S> {
    pub fn ingest(&self, event_kind: &str, payload: &Value) -> Result<IngestOutcome, HookError> {
        let record = match normalize(event_kind, payload) {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!(event_kind, "event not relevant, ignoring");
                return Ok(IngestOutcome::Ignored);
            }
            Err(err) => {
                warn!(event_kind, error = %err, "rejecting event");
                return Err(err.into());
            }
        };
        let stored = self.core.store.events().append(record)?;
        info!(
            event_kind,
            id = %stored.id,
            action = stored.action.as_str(),
            "event stored"
        );
        Ok(IngestOutcome::Stored(stored))
    }

    pub fn latest(&self, limit: u32) -> Result<Vec<EventRecord>, HookError> {
        let events = self.core.store.events().latest(limit)?;
        debug!(limit, returned = events.len(), "served latest events");
        Ok(events)
    }
}
