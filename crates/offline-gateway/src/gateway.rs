//! Offline Gateway
//!
//! Install precaches the manifest, activate drops stale cache versions,
//! fetch goes network-first and falls back to the cache, the offline
//! document, then a synthetic 503.

use std::cell::Cell;

use futures::future::{join_all, try_join_all};

use crate::error::GatewayError;
use crate::http::{Request, Response};
use crate::manifest::CacheManifest;
use crate::traits::{CacheStore, Network};

/// URL schemes never intercepted
const EXCLUDED_SCHEMES: &[&str] = &[
    "chrome-extension:",
    "moz-extension:",
    "safari-extension:",
    "safari-web-extension:",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayPhase {
    Installing,
    Active,
    Serving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Every manifest asset cached
    Complete { cached: usize },
    /// Full install failed; only the critical subset is cached
    Degraded { cached: usize, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Not intercepted; let the browser handle it
    Passthrough,
    Respond(Response),
}

pub struct OfflineGateway<N, C> {
    manifest: CacheManifest,
    origin: String,
    network: N,
    caches: C,
    phase: Cell<GatewayPhase>,
}

impl<N: Network, C: CacheStore> OfflineGateway<N, C> {
    /// `origin` is the worker's origin, e.g. "https://board.example"
    pub fn new(manifest: CacheManifest, origin: impl Into<String>, network: N, caches: C) -> Self {
        let origin = origin.into().trim_end_matches('/').to_string();
        Self {
            manifest,
            origin,
            network,
            caches,
            phase: Cell::new(GatewayPhase::Installing),
        }
    }

    pub fn phase(&self) -> GatewayPhase {
        self.phase.get()
    }

    pub fn manifest(&self) -> &CacheManifest {
        &self.manifest
    }

    /// Absolute URL for a manifest path
    pub fn resolve(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }

    fn is_same_origin(&self, url: &str) -> bool {
        match url.strip_prefix(self.origin.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with(['/', '?', '#']),
            None => false,
        }
    }

    /// Same-origin GETs outside extension schemes are intercepted
    pub fn intercepts(&self, request: &Request) -> bool {
        if !request.is_get() {
            return false;
        }
        if EXCLUDED_SCHEMES.iter().any(|scheme| request.url.starts_with(scheme)) {
            return false;
        }
        self.is_same_origin(&request.url)
    }

    // ========================
    // Install
    // ========================

    pub async fn install(&self) -> Result<InstallOutcome, GatewayError> {
        self.phase.set(GatewayPhase::Installing);
        log::info!(
            "[SW] install: caching {} files into {}",
            self.manifest.assets.len(),
            self.manifest.version
        );
        match self.precache(&self.manifest.assets).await {
            Ok(cached) => Ok(InstallOutcome::Complete { cached }),
            Err(e) => {
                log::error!("[SW] error caching files: {}", e);
                let cached = self.precache(&self.manifest.critical).await?;
                log::warn!("[SW] installed with {} critical files only", cached);
                Ok(InstallOutcome::Degraded {
                    cached,
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Fetch every path, then store them all. Nothing is stored unless
    /// every fetch succeeds.
    async fn precache(&self, paths: &[String]) -> Result<usize, GatewayError> {
        let requests: Vec<Request> = paths
            .iter()
            .map(|path| Request::get(self.resolve(path)).no_cache())
            .collect();
        let results = join_all(requests.iter().map(|r| self.network.fetch(r))).await;

        let mut fetched = Vec::with_capacity(requests.len());
        for (request, result) in requests.iter().zip(results) {
            let response = result?;
            if !response.is_success() {
                return Err(GatewayError::BadStatus {
                    url: request.url.clone(),
                    status: response.status,
                });
            }
            fetched.push((request, response));
        }

        for (request, response) in &fetched {
            self.caches
                .put(&self.manifest.version, &request.url, response)
                .await?;
        }
        Ok(fetched.len())
    }

    // ========================
    // Activate
    // ========================

    /// Delete every cache not named after the current version.
    /// Returns the deleted names.
    pub async fn activate(&self) -> Result<Vec<String>, GatewayError> {
        let stale: Vec<String> = self
            .caches
            .cache_names()
            .await?
            .into_iter()
            .filter(|name| name != &self.manifest.version)
            .collect();
        for name in &stale {
            log::info!("[SW] deleting old cache: {}", name);
        }
        try_join_all(stale.iter().map(|name| self.caches.delete(name))).await?;
        self.phase.set(GatewayPhase::Active);
        Ok(stale)
    }

    // ========================
    // Fetch
    // ========================

    pub async fn handle_fetch(&self, request: &Request) -> FetchOutcome {
        if !self.intercepts(request) {
            return FetchOutcome::Passthrough;
        }
        if self.phase.get() == GatewayPhase::Active {
            self.phase.set(GatewayPhase::Serving);
        }
        FetchOutcome::Respond(self.respond(request).await)
    }

    async fn respond(&self, request: &Request) -> Response {
        match self.network.fetch(request).await {
            Ok(response) => {
                if response.status == 200 {
                    if let Err(e) = self
                        .caches
                        .put(&self.manifest.version, &request.url, &response)
                        .await
                    {
                        log::warn!("[SW] could not cache {}: {}", request.url, e);
                    }
                }
                response
            }
            Err(e) => {
                log::debug!("[SW] network unavailable for {}: {}", request.url, e);
                self.offline_fallback(request).await
            }
        }
    }

    async fn offline_fallback(&self, request: &Request) -> Response {
        if let Some(cached) = self.cached(&request.url).await {
            return cached;
        }
        if request.accepts_html() {
            let offline_url = self.resolve(&self.manifest.offline_document);
            if let Some(document) = self.cached(&offline_url).await {
                return document;
            }
            log::warn!("[SW] offline document {} is not cached", offline_url);
        }
        Response::service_unavailable()
    }

    async fn cached(&self, url: &str) -> Option<Response> {
        match self.caches.lookup(url).await {
            Ok(found) => found,
            Err(e) => {
                log::warn!("[SW] cache lookup for {} failed: {}", url, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::OFFLINE_BODY;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    const ORIGIN: &str = "https://board.test";

    /// Serves whatever is registered; can go offline or fail single URLs
    #[derive(Default)]
    struct FakeNetwork {
        offline: Cell<bool>,
        routes: RefCell<HashMap<String, Response>>,
        failing: RefCell<HashSet<String>>,
        requested: RefCell<Vec<String>>,
    }

    impl FakeNetwork {
        fn serving(manifest: &CacheManifest) -> Self {
            let net = FakeNetwork::default();
            for path in &manifest.assets {
                net.route(path, Response::ok("text/plain", format!("asset {}", path)));
            }
            net
        }

        fn route(&self, path: &str, response: Response) {
            self.routes.borrow_mut().insert(format!("{}{}", ORIGIN, path), response);
        }

        fn fail(&self, path: &str) {
            self.failing.borrow_mut().insert(format!("{}{}", ORIGIN, path));
        }
    }

    #[async_trait(?Send)]
    impl Network for FakeNetwork {
        async fn fetch(&self, request: &Request) -> Result<Response, GatewayError> {
            self.requested.borrow_mut().push(request.url.clone());
            if self.offline.get() || self.failing.borrow().contains(&request.url) {
                return Err(GatewayError::Network {
                    url: request.url.clone(),
                    message: "offline".to_string(),
                });
            }
            Ok(self
                .routes
                .borrow()
                .get(&request.url)
                .cloned()
                .unwrap_or_else(|| Response::new(404, "Not Found")))
        }
    }

    #[derive(Default)]
    struct FakeCaches {
        caches: RefCell<Vec<(String, HashMap<String, Response>)>>,
        fail_puts: Cell<bool>,
    }

    impl FakeCaches {
        fn entries(&self, name: &str) -> usize {
            self.caches
                .borrow()
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, c)| c.len())
                .unwrap_or(0)
        }

        fn seed(&self, name: &str, url: &str, response: Response) {
            let mut caches = self.caches.borrow_mut();
            match caches.iter_mut().find(|(n, _)| n == name) {
                Some((_, cache)) => {
                    cache.insert(url.to_string(), response);
                }
                None => caches.push((name.to_string(), HashMap::from([(url.to_string(), response)]))),
            }
        }
    }

    #[async_trait(?Send)]
    impl CacheStore for FakeCaches {
        async fn cache_names(&self) -> Result<Vec<String>, GatewayError> {
            Ok(self.caches.borrow().iter().map(|(n, _)| n.clone()).collect())
        }

        async fn delete(&self, cache_name: &str) -> Result<bool, GatewayError> {
            let mut caches = self.caches.borrow_mut();
            let before = caches.len();
            caches.retain(|(n, _)| n != cache_name);
            Ok(caches.len() != before)
        }

        async fn put(&self, cache_name: &str, url: &str, response: &Response) -> Result<(), GatewayError> {
            if self.fail_puts.get() {
                return Err(GatewayError::Cache("quota exceeded".to_string()));
            }
            self.seed(cache_name, url, response.clone());
            Ok(())
        }

        async fn lookup(&self, url: &str) -> Result<Option<Response>, GatewayError> {
            Ok(self
                .caches
                .borrow()
                .iter()
                .find_map(|(_, cache)| cache.get(url).cloned()))
        }
    }

    fn gateway(net: FakeNetwork, caches: FakeCaches) -> OfflineGateway<FakeNetwork, FakeCaches> {
        OfflineGateway::new(CacheManifest::default(), ORIGIN, net, caches)
    }

    fn html(path: &str) -> Request {
        Request::get(format!("{}{}", ORIGIN, path)).with_accept("text/html,application/xhtml+xml")
    }

    fn asset(path: &str) -> Request {
        Request::get(format!("{}{}", ORIGIN, path)).with_accept("*/*")
    }

    #[tokio::test]
    async fn test_install_caches_full_manifest() {
        let manifest = CacheManifest::default();
        let gw = gateway(FakeNetwork::serving(&manifest), FakeCaches::default());

        let outcome = gw.install().await.unwrap();
        assert_eq!(outcome, InstallOutcome::Complete { cached: manifest.assets.len() });
        assert_eq!(gw.caches.entries(&manifest.version), manifest.assets.len());
        assert_eq!(gw.phase(), GatewayPhase::Installing);
    }

    #[tokio::test]
    async fn test_install_degrades_to_critical_subset() {
        let manifest = CacheManifest::default();
        let net = FakeNetwork::serving(&manifest);
        net.fail("/icons/icon.svg");
        let gw = gateway(net, FakeCaches::default());

        let outcome = gw.install().await.unwrap();
        match outcome {
            InstallOutcome::Degraded { cached, reason } => {
                assert_eq!(cached, manifest.critical.len());
                assert!(reason.contains("icon.svg"));
            }
            other => panic!("expected degraded install, got {:?}", other),
        }
        assert_eq!(gw.caches.entries(&manifest.version), manifest.critical.len());
    }

    #[tokio::test]
    async fn test_install_treats_missing_asset_as_failure() {
        let manifest = CacheManifest::default();
        let net = FakeNetwork::serving(&manifest);
        net.route("/icons/icon.svg", Response::new(404, "Not Found"));
        let gw = gateway(net, FakeCaches::default());

        assert!(matches!(gw.install().await.unwrap(), InstallOutcome::Degraded { .. }));
    }

    #[tokio::test]
    async fn test_degraded_install_still_serves_offline_document() {
        let manifest = CacheManifest::default();
        let net = FakeNetwork::serving(&manifest);
        let offline_doc = Response::ok("text/html", "<h1>Offline</h1>");
        net.route("/offline.html", offline_doc.clone());
        net.route("/icons/icon.svg", Response::new(404, "Not Found"));
        let gw = gateway(net, FakeCaches::default());

        assert!(matches!(gw.install().await.unwrap(), InstallOutcome::Degraded { .. }));
        gw.activate().await.unwrap();
        gw.network.offline.set(true);

        let outcome = gw.handle_fetch(&html("/?source=pwa")).await;
        assert_eq!(outcome, FetchOutcome::Respond(offline_doc));
    }

    #[tokio::test]
    async fn test_install_fails_when_critical_assets_fail() {
        let net = FakeNetwork::default();
        net.offline.set(true);
        let gw = gateway(net, FakeCaches::default());

        assert!(matches!(gw.install().await, Err(GatewayError::Network { .. })));
        assert!(gw.caches.caches.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_activate_deletes_other_versions() {
        let caches = FakeCaches::default();
        caches.seed("dental-comm-v0.9.0", "https://board.test/", Response::ok("text/html", "old"));
        caches.seed("dental-comm-v0.9.5", "https://board.test/", Response::ok("text/html", "older"));
        caches.seed("dental-comm-v1.0.0", "https://board.test/", Response::ok("text/html", "new"));
        let gw = gateway(FakeNetwork::default(), caches);

        let deleted = gw.activate().await.unwrap();
        assert_eq!(deleted, vec!["dental-comm-v0.9.0", "dental-comm-v0.9.5"]);
        assert_eq!(gw.caches.cache_names().await.unwrap(), vec!["dental-comm-v1.0.0"]);
        assert_eq!(gw.phase(), GatewayPhase::Active);
    }

    #[tokio::test]
    async fn test_online_fetch_is_cached() {
        let net = FakeNetwork::default();
        net.route("/style.css", Response::ok("text/css", "body{}"));
        let gw = gateway(net, FakeCaches::default());
        gw.activate().await.unwrap();

        let outcome = gw.handle_fetch(&asset("/style.css")).await;
        assert_eq!(outcome, FetchOutcome::Respond(Response::ok("text/css", "body{}")));
        assert_eq!(gw.caches.entries("dental-comm-v1.0.0"), 1);
        assert_eq!(gw.phase(), GatewayPhase::Serving);
    }

    #[tokio::test]
    async fn test_non_200_is_returned_but_not_cached() {
        let gw = gateway(FakeNetwork::default(), FakeCaches::default());
        let FetchOutcome::Respond(resp) = gw.handle_fetch(&asset("/missing.png")).await else {
            panic!("expected a response");
        };
        assert_eq!(resp.status, 404);
        assert!(gw.caches.caches.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_cache_write_failure_still_returns_response() {
        let net = FakeNetwork::default();
        net.route("/app.css", Response::ok("text/css", "x"));
        let caches = FakeCaches::default();
        caches.fail_puts.set(true);
        let gw = gateway(net, caches);

        let outcome = gw.handle_fetch(&asset("/app.css")).await;
        assert_eq!(outcome, FetchOutcome::Respond(Response::ok("text/css", "x")));
    }

    #[tokio::test]
    async fn test_offline_serves_cached_copy() {
        let net = FakeNetwork::default();
        net.route("/style.css", Response::ok("text/css", "body{}"));
        let gw = gateway(net, FakeCaches::default());

        gw.handle_fetch(&asset("/style.css")).await;
        gw.network.offline.set(true);

        let outcome = gw.handle_fetch(&asset("/style.css")).await;
        assert_eq!(outcome, FetchOutcome::Respond(Response::ok("text/css", "body{}")));
    }

    #[tokio::test]
    async fn test_offline_html_miss_serves_offline_document() {
        let caches = FakeCaches::default();
        let offline_doc = Response::ok("text/html", "<h1>Offline</h1>");
        caches.seed("dental-comm-v1.0.0", "https://board.test/offline.html", offline_doc.clone());
        let net = FakeNetwork::default();
        net.offline.set(true);
        let gw = gateway(net, caches);

        let outcome = gw.handle_fetch(&html("/index.html")).await;
        assert_eq!(outcome, FetchOutcome::Respond(offline_doc));
    }

    #[tokio::test]
    async fn test_offline_asset_miss_is_503() {
        let caches = FakeCaches::default();
        caches.seed("dental-comm-v1.0.0", "https://board.test/offline.html", Response::ok("text/html", "x"));
        let net = FakeNetwork::default();
        net.offline.set(true);
        let gw = gateway(net, caches);

        let FetchOutcome::Respond(resp) = gw.handle_fetch(&asset("/icons/new.png")).await else {
            panic!("expected a response");
        };
        assert_eq!(resp.status, 503);
        assert_eq!(resp.status_text, "Service Unavailable");
        assert_eq!(resp.content_type.as_deref(), Some("text/plain"));
        assert_eq!(resp.text(), OFFLINE_BODY);
    }

    #[tokio::test]
    async fn test_offline_html_without_offline_document_is_503() {
        let net = FakeNetwork::default();
        net.offline.set(true);
        let gw = gateway(net, FakeCaches::default());

        let FetchOutcome::Respond(resp) = gw.handle_fetch(&html("/")).await else {
            panic!("expected a response");
        };
        assert_eq!(resp.status, 503);
    }

    #[tokio::test]
    async fn test_bypassed_requests_never_touch_network() {
        let gw = gateway(FakeNetwork::default(), FakeCaches::default());

        let post = Request::new("POST", format!("{}/api", ORIGIN));
        let extension = Request::get("chrome-extension://abcdef/script.js");
        let cross_origin = Request::get("https://cdn.example.com/font.woff2");
        let lookalike = Request::get("https://board.test.evil.com/index.html");

        for request in [post, extension, cross_origin, lookalike] {
            assert_eq!(gw.handle_fetch(&request).await, FetchOutcome::Passthrough, "{}", request.url);
        }
        assert!(gw.network.requested.borrow().is_empty());
    }

    #[test]
    fn test_intercepts_same_origin_variants() {
        let gw = gateway(FakeNetwork::default(), FakeCaches::default());
        assert!(gw.intercepts(&Request::get("https://board.test")));
        assert!(gw.intercepts(&Request::get("https://board.test/?v=2")));
        assert!(gw.intercepts(&Request::new("get", "https://board.test/app.js")));
        assert!(!gw.intercepts(&Request::new("HEAD", "https://board.test/app.js")));
    }
}
