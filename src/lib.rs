//! # mod_storage
//!
//! A command-line tool for inspecting and mutating the `mod_storage.sqlite`
//! database a Luanti game server keeps for its mods. Each mod owns a set of
//! (key, value) entries; this tool lists them, inserts new ones, and deletes
//! them by mod name, by key, or by both.
//!
//! ## Features
//!
//! - List the full contents of the entries table
//! - Insert a single entry with duplicate-key detection
//! - Delete entries by (modname, key), by modname, or by key
//! - Environment-variable defaults for all options
//!
//! ## Example
//!
//! ```no_run
//! use mod_storage::store::{open_store, EntryStore};
//!
//! let conn = open_store("mod_storage.sqlite")?;
//! let store = EntryStore::new(&conn);
//! for entry in store.list()? {
//!     println!("{entry}");
//! }
//! # Ok::<(), mod_storage::error::StorageError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod store;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
///
/// Log lines go to stderr so that `view` output on stdout stays clean.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
