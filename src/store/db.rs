//! SQLite connection bootstrap
//!
//! Opens the database file and makes sure the `entries` table exists with the
//! exact layout the game server writes, so the tool works against existing
//! storage files and fresh ones alike.

use crate::error::{Result, StorageError};
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Schema of the entries table, bit-compatible with the storage files
/// written by the game server
const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS `entries` (
\t`modname` TEXT NOT NULL,
\t`key` BLOB NOT NULL,
\t`value` BLOB NOT NULL,
\tPRIMARY KEY (`modname`, `key`)
);";

/// Open a storage database file and bootstrap the entries table
pub fn open_store<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    debug!("Opening database: {}", path.display());

    let conn =
        Connection::open(path).map_err(|e| StorageError::open("open", path, e))?;

    bootstrap(&conn).map_err(|e| StorageError::open("bootstrap", path, e))?;

    debug!("Database ready: {}", path.display());
    Ok(conn)
}

/// Open an in-memory store with the entries table bootstrapped
///
/// Mainly useful for tests; the on-disk layout is identical.
pub fn open_store_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()
        .map_err(|e| StorageError::open("open", ":memory:", e))?;

    bootstrap(&conn).map_err(|e| StorageError::open("bootstrap", ":memory:", e))?;

    Ok(conn)
}

fn bootstrap(conn: &Connection) -> rusqlite::Result<()> {
    // Wait out short-lived external writers instead of failing immediately
    conn.busy_timeout(Duration::from_secs(5))?;
    conn.execute_batch(SCHEMA)?;
    Ok(())
}
