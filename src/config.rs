//! Configuration management for the storage tool
//!
//! Resolves the immutable runtime configuration once, from command-line
//! arguments, environment variables, and built-in defaults, in that order of
//! precedence. The resulting value is passed by reference into the command
//! dispatcher and never mutated.

use crate::cli::{Args, Operation};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Database file used when neither the option nor the variable is set
pub const DEFAULT_DATABASE: &str = "mod_storage.sqlite";

/// Environment variables supplying option defaults
const ENV_DATABASE: &str = "MOD_STORAGE_DATABASE";
const ENV_MODNAME: &str = "MOD_STORAGE_MODNAME";
const ENV_KEY: &str = "MOD_STORAGE_KEY";
const ENV_VALUE: &str = "MOD_STORAGE_VALUE";

/// Immutable runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Database file to operate on
    pub database: PathBuf,
    /// Mod owning the entries; empty when not supplied
    pub modname: String,
    /// Entry key as UTF-8 bytes; empty when not supplied
    pub key: Vec<u8>,
    /// Entry value as UTF-8 bytes; empty when not supplied
    pub value: Vec<u8>,
    /// Operation to execute
    pub operation: Operation,
}

impl Config {
    /// Create configuration from command line arguments
    ///
    /// Options left unset on the command line fall back to the matching
    /// `MOD_STORAGE_*` environment variable, then to the built-in default.
    pub fn from_args(args: &Args) -> Self {
        let database = args
            .database
            .clone()
            .unwrap_or_else(|| PathBuf::from(env_or_default(ENV_DATABASE, DEFAULT_DATABASE)));

        let modname = args
            .modname
            .clone()
            .unwrap_or_else(|| env_or_default(ENV_MODNAME, ""));

        let key = args
            .key
            .clone()
            .unwrap_or_else(|| env_or_default(ENV_KEY, ""))
            .into_bytes();

        let value = args
            .value
            .clone()
            .unwrap_or_else(|| env_or_default(ENV_VALUE, ""))
            .into_bytes();

        Self {
            debug: args.debug,
            database,
            modname,
            key,
            value,
            operation: args.operation,
        }
    }
}

/// Get an environment variable with a default value
fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
