//! Browser Bindings
//!
//! Thin wrappers over the web APIs the board uses, organized by concern.

mod dom;
mod speech;
mod storage;
mod worker;

// Re-export all public items
pub use dom::*;
pub use speech::*;
pub use storage::*;
pub use worker::*;

use wasm_bindgen::JsValue;

/// Whether `name` is a property of `target` (the JS `in` operator)
fn has_property(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}
