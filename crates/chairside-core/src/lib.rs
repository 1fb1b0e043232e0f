//! Chairside Core
//!
//! Layered architecture:
//! - domain: Response entries, the response list state machine, branding
//! - repository: Key/value storage abstractions and the persistence ports
//! - session: Anonymous / authenticated identity handling
//! - board: The application-state struct the UI drives

pub mod board;
pub mod config;
pub mod domain;
pub mod repository;
pub mod session;
pub mod speech;
pub mod store;

pub use board::{BoardApp, NavCommand};
pub use config::{BoardConfig, SpeechSettings};
pub use domain::{BoardError, BrandingConfig, ResponseEntry, ResponseList, SessionError, StorageError};
pub use repository::{ConfigRepository, KeyValueStore, MemoryStore, ResponsePersistence, StorageKeys};
pub use session::{Session, SessionState};
pub use speech::{NullSpeech, SpeechOutput, Utterance};
pub use store::ResponseStore;
