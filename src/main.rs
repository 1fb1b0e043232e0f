//! Chairside Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger("Chairside", 200) {
        web_sys::console::warn_1(&e.to_string().into());
    }
    browser::register_service_worker();
    mount_to_body(App);
}
