use rusqlite::{Connection, Result};
use std::time::Duration;

const MIGRATIONS: &[&str] = &[include_str!("../migrations/0001_init.sql")];

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the on-disk event database in WAL mode and applies pending migrations.
pub fn open_event_db(path: &str) -> Result<Connection> {
    let conn = Connection::open(path)?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    migrate(&conn)?;
    Ok(conn)
}

pub fn open_scratch_db() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    migrate(&conn)?;
    Ok(conn)
}

/// Runs every migration newer than the database's `user_version` and returns
/// the resulting schema version.
pub fn migrate(conn: &Connection) -> Result<i64> {
    let current: i64 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    let mut version = current;
    for sql in MIGRATIONS.iter().skip(current.max(0) as usize) {
        conn.execute_batch(sql)?;
        version += 1;
        conn.pragma_update(None, "user_version", version)?;
    }
    Ok(version)
}
