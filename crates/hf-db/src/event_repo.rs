use crate::store::DbStore;
use crate::util::{decode_action, encode_action, read_failure, write_failure, DbError};
use hf_core::error::{HookError, StoreError};
use hf_core::events::EventRepository;
use hf_core::types::{EventId, EventRecord, NewEventRecord};
use rusqlite::Row;

pub struct EventRepo<'a> {
    store: &'a DbStore,
}

impl<'a> EventRepo<'a> {
    pub fn new(store: &'a DbStore) -> Self {
        Self { store }
    }
}

impl EventRepository for EventRepo<'_> {
    fn append(&self, record: NewEventRecord) -> Result<EventRecord, HookError> {
        let conn = self.store.connection()?;
        let event = EventRecord::from_new(EventId::generate(), record);
        let sql = "INSERT INTO events (id, request_id, author, action, from_branch, to_branch, timestamp) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
        let params = (
            event.id.as_str(),
            event.request_id.as_deref(),
            event.author.as_deref(),
            encode_action(event.action),
            event.from_branch.as_deref(),
            event.to_branch.as_deref(),
            event.timestamp.as_deref(),
        );
        conn.execute(sql, params).map_err(|err| write_failure(&err))?;
        Ok(event)
    }

    fn latest(&self, limit: u32) -> Result<Vec<EventRecord>, HookError> {
        let conn = self.store.connection()?;
        // SQLite orders NULL below every string, so DESC puts them last.
        let mut stmt = conn
            .prepare(
                "SELECT id, request_id, author, action, from_branch, to_branch, timestamp FROM events ORDER BY timestamp DESC, seq DESC LIMIT ?1",
            )
            .map_err(|err| read_failure(&err))?;
        let mut rows = stmt.query([limit]).map_err(|err| read_failure(&err))?;
        let mut events = Vec::new();
        while let Some(row) = rows.next().map_err(|err| read_failure(&err))? {
            events.push(map_event_row(row)?);
        }
        Ok(events)
    }
}

fn map_event_row(row: &Row<'_>) -> Result<EventRecord, StoreError> {
    let id: String = row.get(0).map_err(|err| read_failure(&err))?;
    let action: String = row.get(3).map_err(|err| read_failure(&err))?;
    Ok(EventRecord {
        id: EventId::new(id).map_err(|err| DbError::InvalidId {
            message: err.to_string(),
        })?,
        request_id: row.get(1).map_err(|err| read_failure(&err))?,
        author: row.get(2).map_err(|err| read_failure(&err))?,
        action: decode_action(&action)?,
        from_branch: row.get(4).map_err(|err| read_failure(&err))?,
        to_branch: row.get(5).map_err(|err| read_failure(&err))?,
        timestamp: row.get(6).map_err(|err| read_failure(&err))?,
    })
}
