//! Repository Layer
//!
//! Storage abstractions and implementations.

mod config_repo;
mod keys;
mod memory;
mod persistence;
mod traits;

pub use config_repo::ConfigRepository;
pub use keys::StorageKeys;
pub use memory::MemoryStore;
pub use persistence::{IdentityPersistence, LegacyPersistence, NoopPersistence};
pub use traits::{KeyValueStore, ResponsePersistence};
