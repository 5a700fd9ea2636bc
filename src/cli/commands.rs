//! Command implementations for the CLI

use crate::{
    cli::Operation,
    config::Config,
    error::{Result, StorageError},
    store::{Entry, EntryStore, open_store},
};
use tracing::{info, instrument};

/// Execute the operation selected on the command line
#[instrument(skip(config))]
pub fn execute_command(config: &Config) -> Result<()> {
    match config.operation {
        Operation::View => execute_view(config),
        Operation::Insert => execute_insert(config),
        Operation::Delete => execute_delete(config),
    }
}

/// Print the full contents of the entries table to stdout
#[instrument(skip(config))]
fn execute_view(config: &Config) -> Result<()> {
    let conn = open_store(&config.database)?;
    let store = EntryStore::new(&conn);
    let entries = store.list()?;

    println!("TABLE 'entries':");
    println!("================");
    for entry in &entries {
        println!("{entry}");
    }

    Ok(())
}

/// Insert a single entry; modname, key, and value are all required
#[instrument(skip(config))]
fn execute_insert(config: &Config) -> Result<()> {
    if config.modname.is_empty() || config.key.is_empty() || config.value.is_empty() {
        return Err(StorageError::syntax("missing arguments"));
    }

    let conn = open_store(&config.database)?;
    let store = EntryStore::new(&conn);

    let entry = Entry::new(
        config.modname.clone(),
        config.key.clone(),
        config.value.clone(),
    );
    store.insert(&entry)?;

    info!("Inserted entry for mod '{}'", config.modname);
    Ok(())
}

/// Delete entries by (modname, key), by modname, or by key
///
/// Selector precedence: both present matches one row, modname alone matches
/// the whole mod, key alone matches the key across all mods. Neither present
/// is a syntax error. Matching nothing is a silent success.
#[instrument(skip(config))]
fn execute_delete(config: &Config) -> Result<()> {
    let has_modname = !config.modname.is_empty();
    let has_key = !config.key.is_empty();

    if !has_modname && !has_key {
        return Err(StorageError::syntax("missing arguments"));
    }

    let conn = open_store(&config.database)?;
    let store = EntryStore::new(&conn);

    let removed = if has_modname && has_key {
        store.delete_entry(&config.modname, &config.key)?
    } else if has_modname {
        store.delete_mod(&config.modname)?
    } else {
        store.delete_key(&config.key)?
    };

    info!("Removed {} entries", removed);
    Ok(())
}
