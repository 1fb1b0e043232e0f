//! Domain Layer
//!
//! Contains the board entities and their invariants.
//! This layer has NO external dependencies (except serde and thiserror).

mod branding;
mod error;
mod response;

pub use branding::BrandingConfig;
pub use error::{BoardError, SessionError, StorageError};
pub use response::{ResponseEntry, ResponseList};
