//! Cache Manifest
//!
//! The cache name carries the version: bumping it makes the next
//! activation drop every older cache.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheManifest {
    /// Cache name, e.g. "dental-comm-v1.0.0"
    pub version: String,
    /// Paths precached at install, in order
    pub assets: Vec<String>,
    /// Minimal subset retried when the full install fails
    pub critical: Vec<String>,
    /// Served to HTML requests that miss the cache while offline
    pub offline_document: String,
}

impl Default for CacheManifest {
    fn default() -> Self {
        let paths = |list: &[&str]| list.iter().map(|p| p.to_string()).collect::<Vec<_>>();
        Self {
            version: "dental-comm-v1.0.0".to_string(),
            assets: paths(&[
                "/",
                "/index.html",
                "/style.css",
                "/chairside-ui.js",
                "/chairside-ui_bg.wasm",
                "/manifest.json",
                "/offline.html",
                "/icons/icon.svg",
            ]),
            critical: paths(&[
                "/",
                "/index.html",
                "/style.css",
                "/chairside-ui.js",
                "/chairside-ui_bg.wasm",
                "/manifest.json",
                "/offline.html",
            ]),
            offline_document: "/offline.html".to_string(),
        }
    }
}
