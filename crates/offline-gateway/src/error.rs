//! Gateway Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("network request for {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("{url} returned status {status}")]
    BadStatus { url: String, status: u16 },
    #[error("cache operation failed: {0}")]
    Cache(String),
    #[error("platform error: {0}")]
    Platform(String),
}
