//! Service Worker Registration

use leptos::task::spawn_local;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use super::has_property;

/// Script served from the site root so its scope covers the whole app
pub const SERVICE_WORKER_URL: &str = "/sw.js";

/// Register the offline service worker. Failures are logged only.
pub fn register_service_worker() {
    let Some(win) = web_sys::window() else { return };
    let navigator = win.navigator();
    if !has_property(&JsValue::from(navigator.clone()), "serviceWorker") {
        log::info!("[SW] service workers not available");
        return;
    }
    let promise = navigator.service_worker().register(SERVICE_WORKER_URL);
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => log::info!("[SW] registered {}", SERVICE_WORKER_URL),
            Err(e) => log::warn!("[SW] registration failed: {:?}", e),
        }
    });
}
