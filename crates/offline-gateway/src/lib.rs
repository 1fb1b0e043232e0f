//! Offline Cache Gateway
//!
//! Network-first fetch handling with a versioned cache behind it:
//! - manifest: the versioned asset list precached at install
//! - http: request/response values the policy works on
//! - traits: network and cache-storage seams
//! - gateway: install / activate / fetch policy
//! - worker (wasm32 only): service-worker bindings

mod error;
mod gateway;
mod http;
mod manifest;
mod traits;

#[cfg(target_arch = "wasm32")]
mod worker;

pub use error::GatewayError;
pub use gateway::{FetchOutcome, GatewayPhase, InstallOutcome, OfflineGateway};
pub use http::{Request, Response, OFFLINE_BODY};
pub use manifest::CacheManifest;
pub use traits::{CacheStore, Network};
