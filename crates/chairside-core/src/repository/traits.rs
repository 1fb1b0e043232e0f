//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for persisted data.
//! Implementations can use browser local storage, in-memory maps, etc.

use crate::domain::{ResponseEntry, StorageError};

/// String-keyed key/value store holding JSON text.
///
/// Reads never fail: a missing or unreadable slot is `None`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Where the response store writes its list after every mutation
pub trait ResponsePersistence {
    fn save(&self, responses: &[ResponseEntry]) -> Result<(), StorageError>;

    /// Short label for logs
    fn describe(&self) -> String;
}
