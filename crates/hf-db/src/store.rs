use crate::event_repo::EventRepo;
use crate::schema;
use hf_core::error::StoreError;
use hf_core::store::Store;
use rusqlite::Connection;
use std::sync::{Mutex, MutexGuard};
use tracing::info;

/// Process-wide handle on the event database.
///
/// Built once at startup and shared behind an `Arc`; access to the single
/// connection is serialized by the mutex.
pub struct DbStore {
    conn: Mutex<Connection>,
}

impl DbStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    pub fn open(path: &str) -> Result<Self, StoreError> {
        let conn = schema::open_event_db(path).map_err(|err| StoreError::Unavailable {
            message: err.to_string(),
        })?;
        info!(path, "event store opened");
        Ok(Self::new(conn))
    }

    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = schema::open_scratch_db().map_err(|err| StoreError::Unavailable {
            message: err.to_string(),
        })?;
        Ok(Self::new(conn))
    }

    pub fn connection(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|err| StoreError::Unavailable {
            message: err.to_string(),
        })
    }

    pub fn close(self) -> Result<(), StoreError> {
        let conn = self.conn.into_inner().map_err(|err| StoreError::Unavailable {
            message: err.to_string(),
        })?;
        conn.close().map_err(|(_, err)| StoreError::Unavailable {
            message: err.to_string(),
        })?;
        info!("event store closed");
        Ok(())
    }
}

impl Store for DbStore {
    type Events<'a>
        = EventRepo<'a>
    where
        Self: 'a;

    fn events(&self) -> Self::Events<'_> {
        EventRepo::new(self)
    }
}
