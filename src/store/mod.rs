//! Persistent storage for mod entries
//!
//! Provides the SQLite connection bootstrap and the entries repository.

pub mod db;
pub mod entries;

pub use db::{open_store, open_store_in_memory};
pub use entries::{Entry, EntryStore};
