//! Login Panel Component
//!
//! Shown in place of the board until a practice identifier is entered.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use chairside_core::SessionError;

use crate::browser;
use crate::context::AppContext;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (username, set_username) = signal(String::new());

    let login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let identifier = username.get();
        match ctx.update(|board| board.login(&identifier)) {
            Some(Ok(())) => {
                log::info!("[LOGIN] signed in as {}", identifier.trim());
                set_username.set(String::new());
            }
            Some(Err(SessionError::MissingIdentifier)) => {
                browser::alert("Please enter a practice name.");
            }
            Some(Err(e)) => log::warn!("[LOGIN] {}", e),
            None => {}
        }
    };

    view! {
        <form id="loginPanel" class="login-panel" on:submit=login>
            <h2>"Practice login"</h2>
            <input
                id="usernameInput"
                type="text"
                placeholder="Practice name"
                autocomplete="username"
                prop:value=move || username.get()
                on:input=move |ev| {
                    if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                        set_username.set(input.value());
                    }
                }
            />
            <button id="loginButton" type="submit">"Log in"</button>
        </form>
    }
}
