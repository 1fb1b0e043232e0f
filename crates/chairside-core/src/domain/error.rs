//! Domain Errors
//!
//! Every error here is recoverable: the board stays interactive and the
//! caller decides whether to surface it.

use thiserror::Error;

/// Rejected response-list mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("response text is empty")]
    EmptyText,
    #[error("response list is full ({0} entries)")]
    Full(usize),
    #[error("response at index {0} is a default and cannot be removed")]
    DefaultEntry(usize),
    #[error("no response at index {0}")]
    OutOfRange(usize),
}

/// Persisted-storage failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write {key}: {message}")]
    Write { key: String, message: String },
    #[error("failed to serialize {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Identity session failures
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("a practitioner identifier is required")]
    MissingIdentifier,
    #[error(transparent)]
    Storage(#[from] StorageError),
}
