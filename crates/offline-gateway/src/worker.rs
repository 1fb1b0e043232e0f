//! Service Worker Bindings
//!
//! `public/sw.js` loads this module and forwards install / activate /
//! fetch events to the exported functions below.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use js_sys::{Array, Promise, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::ServiceWorkerGlobalScope;

use crate::error::GatewayError;
use crate::gateway::{FetchOutcome, InstallOutcome, OfflineGateway};
use crate::http::{Request, Response};
use crate::manifest::CacheManifest;
use crate::traits::{CacheStore, Network};

type WorkerGateway = OfflineGateway<FetchNetwork, BrowserCaches>;

thread_local! {
    static GATEWAY: RefCell<Option<Rc<WorkerGateway>>> = const { RefCell::new(None) };
}

fn scope() -> ServiceWorkerGlobalScope {
    js_sys::global().unchecked_into()
}

fn platform(context: &str, value: JsValue) -> GatewayError {
    GatewayError::Platform(format!("{}: {:?}", context, value))
}

fn to_js(error: GatewayError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

fn gateway() -> Result<Rc<WorkerGateway>, JsValue> {
    GATEWAY.with(|slot| {
        if let Some(existing) = slot.borrow().as_ref() {
            return Ok(existing.clone());
        }
        let scope = scope();
        let caches = scope.caches()?;
        let origin = scope.location().origin();
        let gateway = Rc::new(OfflineGateway::new(
            CacheManifest::default(),
            origin,
            FetchNetwork { scope },
            BrowserCaches { storage: caches },
        ));
        *slot.borrow_mut() = Some(gateway.clone());
        Ok(gateway)
    })
}

// ========================
// Conversions
// ========================

async fn read_response(response: web_sys::Response) -> Result<Response, GatewayError> {
    let status = response.status();
    let status_text = response.status_text();
    let content_type = response.headers().get("Content-Type").ok().flatten();
    let buffer = response.array_buffer().map_err(|e| platform("read body", e))?;
    let buffer = JsFuture::from(buffer)
        .await
        .map_err(|e| platform("read body", e))?;
    Ok(Response {
        status,
        status_text,
        content_type,
        body: Uint8Array::new(&buffer).to_vec(),
    })
}

fn to_web_response(response: &Response) -> Result<web_sys::Response, JsValue> {
    let init = web_sys::ResponseInit::new();
    init.set_status(response.status);
    init.set_status_text(&response.status_text);
    let headers = web_sys::Headers::new()?;
    if let Some(content_type) = &response.content_type {
        headers.set("Content-Type", content_type)?;
    }
    init.set_headers(&headers);
    if response.is_null_body_status() {
        return web_sys::Response::new_with_opt_buffer_source_and_init(None, &init);
    }
    let body = Uint8Array::from(response.body.as_slice());
    web_sys::Response::new_with_opt_buffer_source_and_init(Some(&*body), &init)
}

fn from_web_request(request: &web_sys::Request) -> Request {
    Request {
        method: request.method(),
        url: request.url(),
        accept: request.headers().get("Accept").ok().flatten(),
        no_cache: false,
    }
}

// ========================
// Platform seams
// ========================

pub struct FetchNetwork {
    scope: ServiceWorkerGlobalScope,
}

#[async_trait(?Send)]
impl Network for FetchNetwork {
    async fn fetch(&self, request: &Request) -> Result<Response, GatewayError> {
        let init = web_sys::RequestInit::new();
        init.set_method(&request.method);
        if request.no_cache {
            init.set_cache(web_sys::RequestCache::NoCache);
        }
        let web_request = web_sys::Request::new_with_str_and_init(&request.url, &init)
            .map_err(|e| platform("build request", e))?;
        if let Some(accept) = &request.accept {
            web_request
                .headers()
                .set("Accept", accept)
                .map_err(|e| platform("set accept", e))?;
        }
        let value = JsFuture::from(self.scope.fetch_with_request(&web_request))
            .await
            .map_err(|e| GatewayError::Network {
                url: request.url.clone(),
                message: format!("{:?}", e),
            })?;
        let response: web_sys::Response = value.dyn_into().map_err(|e| platform("fetch result", e))?;
        read_response(response).await
    }
}

pub struct BrowserCaches {
    storage: web_sys::CacheStorage,
}

impl BrowserCaches {
    async fn open(&self, name: &str) -> Result<web_sys::Cache, GatewayError> {
        let cache = JsFuture::from(self.storage.open(name))
            .await
            .map_err(|e| GatewayError::Cache(format!("open {}: {:?}", name, e)))?;
        cache.dyn_into().map_err(|e| platform("open cache", e))
    }
}

#[async_trait(?Send)]
impl CacheStore for BrowserCaches {
    async fn cache_names(&self) -> Result<Vec<String>, GatewayError> {
        let keys = JsFuture::from(self.storage.keys())
            .await
            .map_err(|e| GatewayError::Cache(format!("keys: {:?}", e)))?;
        Ok(Array::from(&keys).iter().filter_map(|k| k.as_string()).collect())
    }

    async fn delete(&self, cache_name: &str) -> Result<bool, GatewayError> {
        let deleted = JsFuture::from(self.storage.delete(cache_name))
            .await
            .map_err(|e| GatewayError::Cache(format!("delete {}: {:?}", cache_name, e)))?;
        Ok(deleted.as_bool().unwrap_or(false))
    }

    async fn put(&self, cache_name: &str, url: &str, response: &Response) -> Result<(), GatewayError> {
        let cache = self.open(cache_name).await?;
        let response = to_web_response(response).map_err(|e| platform("build response", e))?;
        JsFuture::from(cache.put_with_str(url, &response))
            .await
            .map_err(|e| GatewayError::Cache(format!("put {}: {:?}", url, e)))?;
        Ok(())
    }

    async fn lookup(&self, url: &str) -> Result<Option<Response>, GatewayError> {
        let found = JsFuture::from(self.storage.match_with_str(url))
            .await
            .map_err(|e| GatewayError::Cache(format!("match {}: {:?}", url, e)))?;
        if found.is_undefined() || found.is_null() {
            return Ok(None);
        }
        let response: web_sys::Response = found.dyn_into().map_err(|e| platform("cached response", e))?;
        read_response(response).await.map(Some)
    }
}

// ========================
// Exported event handlers
// ========================

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger("SW", 200) {
        web_sys::console::warn_1(&e.to_string().into());
    }
}

/// Synchronous check so the loader can skip `respondWith` for bypassed
/// requests
#[wasm_bindgen]
pub fn intercepts(method: &str, url: &str) -> Result<bool, JsValue> {
    Ok(gateway()?.intercepts(&Request::new(method, url)))
}

#[wasm_bindgen]
pub fn on_install() -> Promise {
    future_to_promise(async move {
        let gateway = gateway()?;
        match gateway.install().await.map_err(to_js)? {
            InstallOutcome::Complete { cached } => log::info!("[SW] cached {} files", cached),
            InstallOutcome::Degraded { cached, reason } => {
                log::warn!("[SW] degraded install ({} files): {}", cached, reason)
            }
        }
        JsFuture::from(scope().skip_waiting()?).await?;
        Ok(JsValue::UNDEFINED)
    })
}

#[wasm_bindgen]
pub fn on_activate() -> Promise {
    future_to_promise(async move {
        let gateway = gateway()?;
        gateway.activate().await.map_err(to_js)?;
        JsFuture::from(scope().clients().claim()).await?;
        Ok(JsValue::UNDEFINED)
    })
}

#[wasm_bindgen]
pub fn on_fetch(request: web_sys::Request) -> Promise {
    future_to_promise(async move {
        let gateway = gateway()?;
        match gateway.handle_fetch(&from_web_request(&request)).await {
            FetchOutcome::Passthrough => JsFuture::from(scope().fetch_with_request(&request)).await,
            FetchOutcome::Respond(response) => Ok(to_web_response(&response)?.into()),
        }
    })
}
