//! Error types for the storage tool
//!
//! Provides structured error handling with context and proper error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mod storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// Command-line usage errors (missing or conflicting arguments)
    #[error("Syntax error: {message}")]
    Syntax { message: String },

    /// An insert collided with an existing (modname, key) pair
    #[error("duplicate entry: key `{key}` already exists for mod `{modname}`")]
    DuplicateKey { modname: String, key: String },

    /// Failure to open or bootstrap the database file
    #[error("Database error: {operation} failed on {}", .path.display())]
    Open {
        operation: String,
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Failure while executing a statement against the entries table
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
}

impl StorageError {
    /// Create a new syntax error
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax {
            message: message.into(),
        }
    }

    /// Create a new duplicate-key error
    pub fn duplicate_key(modname: impl Into<String>, key: impl Into<String>) -> Self {
        Self::DuplicateKey {
            modname: modname.into(),
            key: key.into(),
        }
    }

    /// Create a new database-open error
    pub fn open<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: rusqlite::Error,
    ) -> Self {
        Self::Open {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new statement-execution error
    pub fn database(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Process exit status this error maps to
    ///
    /// Syntax errors exit 1, storage faults exit 2. Success and help/version
    /// paths exit 0 and never reach here.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Syntax { .. } => 1,
            _ => 2,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, StorageError>;
