//! Entries repository
//!
//! CRUD statements over the `entries` table. SQL stays inside this module;
//! callers work with `Entry` values and affected-row counts.

use crate::error::{Result, StorageError};
use rusqlite::{Connection, ErrorCode, params};
use std::fmt;

/// A single (modname, key, value) record in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Mod owning the entry
    pub modname: String,
    /// Entry key
    pub key: Vec<u8>,
    /// Entry value
    pub value: Vec<u8>,
}

impl Entry {
    /// Create a new entry
    pub fn new(
        modname: impl Into<String>,
        key: impl Into<Vec<u8>>,
        value: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            modname: modname.into(),
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Entry {
    /// Renders the entry as a (modname, key, value) tuple, with key and value
    /// decoded lossily as UTF-8
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:?}, {:?}, {:?})",
            self.modname,
            String::from_utf8_lossy(&self.key),
            String::from_utf8_lossy(&self.value)
        )
    }
}

/// SQLite-backed repository for the entries table
pub struct EntryStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> EntryStore<'conn> {
    /// Create a repository over an open connection
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// List every entry in storage order
    pub fn list(&self) -> Result<Vec<Entry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT modname, key, value FROM entries")
            .map_err(|e| StorageError::database("listing entries", e))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(Entry {
                    modname: row.get(0)?,
                    key: row.get(1)?,
                    value: row.get(2)?,
                })
            })
            .map_err(|e| StorageError::database("listing entries", e))?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row.map_err(|e| StorageError::database("reading entry row", e))?);
        }

        Ok(entries)
    }

    /// Insert a new entry
    ///
    /// A (modname, key) collision surfaces as [`StorageError::DuplicateKey`];
    /// the existing row is left untouched.
    pub fn insert(&self, entry: &Entry) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO entries (modname, key, value) VALUES (?1, ?2, ?3)",
                params![entry.modname, entry.key, entry.value],
            )
            .map_err(|e| {
                if let rusqlite::Error::SqliteFailure(sqlite_err, _) = &e {
                    if sqlite_err.code == ErrorCode::ConstraintViolation {
                        return StorageError::duplicate_key(
                            entry.modname.clone(),
                            String::from_utf8_lossy(&entry.key),
                        );
                    }
                }
                StorageError::database("inserting entry", e)
            })?;

        Ok(())
    }

    /// Delete the entry matching both modname and key; returns rows removed
    pub fn delete_entry(&self, modname: &str, key: &[u8]) -> Result<usize> {
        self.conn
            .execute(
                "DELETE FROM entries WHERE modname = ?1 AND key = ?2",
                params![modname, key],
            )
            .map_err(|e| StorageError::database("deleting entry", e))
    }

    /// Delete every entry owned by the given mod; returns rows removed
    pub fn delete_mod(&self, modname: &str) -> Result<usize> {
        self.conn
            .execute("DELETE FROM entries WHERE modname = ?1", params![modname])
            .map_err(|e| StorageError::database("deleting mod entries", e))
    }

    /// Delete every entry with the given key, across all mods; returns rows
    /// removed
    pub fn delete_key(&self, key: &[u8]) -> Result<usize> {
        self.conn
            .execute("DELETE FROM entries WHERE key = ?1", params![key])
            .map_err(|e| StorageError::database("deleting key entries", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::open_store_in_memory;

    fn seed(store: &EntryStore<'_>, rows: &[(&str, &[u8], &[u8])]) {
        for (modname, key, value) in rows {
            store.insert(&Entry::new(*modname, *key, *value)).unwrap();
        }
    }

    #[test]
    fn test_insert_then_list_roundtrip() {
        let conn = open_store_in_memory().unwrap();
        let store = EntryStore::new(&conn);

        let entry = Entry::new("mod_a", b"k1".to_vec(), b"v1".to_vec());
        store.insert(&entry).unwrap();

        let entries = store.list().unwrap();
        assert_eq!(entries, vec![entry]);
    }

    #[test]
    fn test_duplicate_insert_fails_and_keeps_single_row() {
        let conn = open_store_in_memory().unwrap();
        let store = EntryStore::new(&conn);

        store
            .insert(&Entry::new("mod_a", b"k1".to_vec(), b"v1".to_vec()))
            .unwrap();
        let err = store
            .insert(&Entry::new("mod_a", b"k1".to_vec(), b"other".to_vec()))
            .unwrap_err();

        assert!(matches!(
            err,
            StorageError::DuplicateKey { ref modname, ref key }
                if modname == "mod_a" && key == "k1"
        ));

        // The original row survives unchanged
        let entries = store.list().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].value, b"v1");
    }

    #[test]
    fn test_same_key_under_different_mods_is_allowed() {
        let conn = open_store_in_memory().unwrap();
        let store = EntryStore::new(&conn);

        seed(&store, &[("mod_a", b"k1", b"v1"), ("mod_b", b"k1", b"v2")]);
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn test_delete_entry_removes_only_that_row() {
        let conn = open_store_in_memory().unwrap();
        let store = EntryStore::new(&conn);

        seed(
            &store,
            &[
                ("mod_a", b"k1", b"v1"),
                ("mod_a", b"k2", b"v2"),
                ("mod_b", b"k1", b"v3"),
            ],
        );

        let removed = store.delete_entry("mod_a", b"k1").unwrap();
        assert_eq!(removed, 1);

        let entries = store.list().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(!entries.iter().any(|e| e.modname == "mod_a" && e.key == b"k1"));
    }

    #[test]
    fn test_delete_mod_removes_all_rows_for_mod() {
        let conn = open_store_in_memory().unwrap();
        let store = EntryStore::new(&conn);

        seed(
            &store,
            &[
                ("mod_a", b"k1", b"v1"),
                ("mod_a", b"k2", b"v2"),
                ("mod_b", b"k1", b"v3"),
            ],
        );

        let removed = store.delete_mod("mod_a").unwrap();
        assert_eq!(removed, 2);

        let entries = store.list().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].modname, "mod_b");
    }

    #[test]
    fn test_delete_key_removes_key_across_mods() {
        let conn = open_store_in_memory().unwrap();
        let store = EntryStore::new(&conn);

        seed(
            &store,
            &[
                ("mod_a", b"k1", b"v1"),
                ("mod_a", b"k2", b"v2"),
                ("mod_b", b"k1", b"v3"),
            ],
        );

        let removed = store.delete_key(b"k1").unwrap();
        assert_eq!(removed, 2);

        let entries = store.list().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key, b"k2");
    }

    #[test]
    fn test_delete_missing_pair_is_silent_noop() {
        let conn = open_store_in_memory().unwrap();
        let store = EntryStore::new(&conn);

        seed(&store, &[("mod_a", b"k1", b"v1")]);

        let removed = store.delete_entry("mod_a", b"missing").unwrap();
        assert_eq!(removed, 0);
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_binary_keys_and_values_survive_roundtrip() {
        let conn = open_store_in_memory().unwrap();
        let store = EntryStore::new(&conn);

        // Not valid UTF-8; BLOB columns must store it verbatim
        let entry = Entry::new("mod_a", vec![0xff, 0x00, 0xfe], vec![0x01, 0x80]);
        store.insert(&entry).unwrap();

        let entries = store.list().unwrap();
        assert_eq!(entries, vec![entry]);
    }

    #[test]
    fn test_display_formats_tuple() {
        let entry = Entry::new("mod_a", b"k1".to_vec(), b"v1".to_vec());
        assert_eq!(entry.to_string(), r#"("mod_a", "k1", "v1")"#);
    }
}
