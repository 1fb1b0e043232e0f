//! Leptos KeyNav Utilities
//!
//! Document-level keyboard binding and focus helpers for Leptos boards
//! driven by arrow keys.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Keys that press the focused control
const ACTIVATION_KEYS: &[&str] = &["Enter", " ", "Spacebar"];

/// Elements that consume keys themselves
const TEXT_FIELD_TAGS: &[&str] = &["INPUT", "TEXTAREA", "SELECT"];

/// Whether a document-level handler may take `key` from the focused element
///
/// Text fields keep every key. Activation keys are taken only from the page
/// itself or from an element whose id starts with `item_prefix`, so other
/// buttons still click normally.
pub fn owns_key(tag_name: &str, element_id: &str, key: &str, item_prefix: &str) -> bool {
    let tag = tag_name.to_ascii_uppercase();
    if TEXT_FIELD_TAGS.contains(&tag.as_str()) {
        return false;
    }
    if !ACTIVATION_KEYS.contains(&key) {
        return true;
    }
    let on_page = tag.is_empty() || tag == "BODY" || tag == "HTML";
    on_page || (!item_prefix.is_empty() && element_id.starts_with(item_prefix))
}

fn target_element(ev: &web_sys::KeyboardEvent) -> Option<web_sys::Element> {
    ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok())
}

/// Bind a document keydown handler
///
/// `on_key` receives the `KeyboardEvent.key` value and returns true when
/// it handled the key; the default action is then suppressed. Keys that
/// `owns_key` leaves to the focused element never reach `on_key`.
pub fn bind_global_keydown<F>(item_prefix: &'static str, on_key: F)
where
    F: Fn(&str) -> bool + 'static,
{
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        let (tag, id) = match target_element(&ev) {
            Some(el) => (el.tag_name(), el.id()),
            None => (String::new(), String::new()),
        };
        if !owns_key(&tag, &id, &key, item_prefix) {
            return;
        }
        if on_key(&key) {
            ev.prevent_default();
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        }
    }
    on_keydown.forget();
}

/// Focus the element with the given id, if present
pub fn focus_element_by_id(id: &str) -> bool {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };
    match el.dyn_into::<web_sys::HtmlElement>() {
        Ok(html) => html.focus().is_ok(),
        Err(_) => false,
    }
}

/// Keep DOM focus on the element for the selected index
///
/// `target` is re-evaluated reactively; focus moves only when its value
/// changes, and `None` leaves focus where it is. `id_for` maps an index to
/// an element id.
pub fn follow_focus<T, F>(target: T, id_for: F)
where
    T: Fn() -> Option<usize> + 'static,
    F: Fn(usize) -> String + 'static,
{
    Effect::new(move |prev: Option<Option<usize>>| {
        let current = target();
        if prev != Some(current) {
            if let Some(index) = current {
                focus_element_by_id(&id_for(index));
            }
        }
        current
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const TILE: &str = "response-btn-";

    #[test]
    fn test_text_fields_keep_every_key() {
        assert!(!owns_key("INPUT", "newResponseText", "ArrowLeft", TILE));
        assert!(!owns_key("textarea", "", "Enter", TILE));
        assert!(!owns_key("input", "speechRate", "ArrowUp", TILE));
        assert!(!owns_key("SELECT", "", " ", TILE));
    }

    #[test]
    fn test_other_buttons_keep_activation_keys() {
        assert!(!owns_key("BUTTON", "adminToggle", "Enter", TILE));
        assert!(!owns_key("BUTTON", "instructionsToggle", " ", TILE));
        assert!(!owns_key("BUTTON", "logoutButton", "Spacebar", TILE));
    }

    #[test]
    fn test_tiles_and_page_take_activation_keys() {
        assert!(owns_key("BUTTON", "response-btn-0", "Enter", TILE));
        assert!(owns_key("BUTTON", "response-btn-7", " ", TILE));
        assert!(owns_key("BODY", "", "Enter", TILE));
        assert!(owns_key("", "", " ", TILE));
    }

    #[test]
    fn test_arrows_are_taken_outside_text_fields() {
        assert!(owns_key("BUTTON", "adminToggle", "ArrowRight", TILE));
        assert!(owns_key("BODY", "", "ArrowUp", TILE));
    }

    #[test]
    fn test_empty_prefix_matches_no_item() {
        assert!(!owns_key("BUTTON", "response-btn-0", "Enter", ""));
    }
}
