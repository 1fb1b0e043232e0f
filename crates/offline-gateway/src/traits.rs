//! Gateway Seams
//!
//! The service worker implements these over `fetch` and `CacheStorage`;
//! tests implement them in memory. Futures are `?Send` because browser
//! handles are single-threaded.

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::http::{Request, Response};

#[async_trait(?Send)]
pub trait Network {
    /// Perform the request. Any HTTP status is `Ok`; only transport
    /// failures are errors.
    async fn fetch(&self, request: &Request) -> Result<Response, GatewayError>;
}

#[async_trait(?Send)]
pub trait CacheStore {
    async fn cache_names(&self) -> Result<Vec<String>, GatewayError>;

    /// Returns whether a cache by that name existed
    async fn delete(&self, cache_name: &str) -> Result<bool, GatewayError>;

    async fn put(&self, cache_name: &str, url: &str, response: &Response) -> Result<(), GatewayError>;

    /// Search every cache, oldest first
    async fn lookup(&self, url: &str) -> Result<Option<Response>, GatewayError>;
}
