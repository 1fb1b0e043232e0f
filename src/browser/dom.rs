//! Document Helpers

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// CSS custom property the stylesheet reads for the practice colour
pub const BRAND_COLOR_VAR: &str = "--brand-color";

/// Set the brand colour on the root element
pub fn apply_brand_color(color: &str) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(root) = root {
        if let Err(e) = root.style().set_property(BRAND_COLOR_VAR, color) {
            log::warn!("[DOM] could not set {}: {:?}", BRAND_COLOR_VAR, e);
        }
    }
}

/// Blocking prompt
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

pub fn reload_page() {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().reload() {
            log::warn!("[DOM] reload failed: {:?}", e);
        }
    }
}

/// Read a file as a `data:` URL and hand it to `on_loaded`
pub fn read_data_url<F>(file: &web_sys::File, on_loaded: F) -> Result<(), String>
where
    F: FnOnce(String) + 'static,
{
    let reader = web_sys::FileReader::new().map_err(|e| format!("FileReader: {:?}", e))?;
    let source = reader.clone();
    let onload = Closure::once(move |_ev: web_sys::Event| match source.result() {
        Ok(value) => match value.as_string() {
            Some(url) => on_loaded(url),
            None => log::warn!("[DOM] file reader returned a non-string result"),
        },
        Err(e) => log::warn!("[DOM] file read failed: {:?}", e),
    });
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();
    reader
        .read_as_data_url(file)
        .map_err(|e| format!("read_as_data_url: {:?}", e))
}
