//! Admin Panel Component
//!
//! Overlay for managing custom responses, voice settings, branding and
//! diagnostics. Keyboard navigation is suspended while it is open.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{BrandingSettings, DeleteConfirmButton, DiagnosticsLog, SpeechSettingsForm};
use crate::context::AppContext;

#[component]
pub fn AdminPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (new_text, set_new_text) = signal(String::new());

    let is_open = move || ctx.with(|board| board.is_admin_open());
    let is_full = move || ctx.with(|board| board.is_full());
    let logged_in = move || ctx.with(|board| board.identity().is_some());
    let capacity_hint = move || {
        ctx.with(|board| format!("{} of {} responses", board.responses().len(), board.config().max_responses))
    };

    let add_response = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        match ctx.update(|board| board.add_response(&text)) {
            Some(Ok(entry)) => {
                log::info!("[ADMIN] added response #{}", entry.id);
                set_new_text.set(String::new());
            }
            Some(Err(e)) => log::debug!("[ADMIN] add rejected: {}", e),
            None => {}
        }
    };

    let entries = move || {
        ctx.with(|board| {
            board
                .responses()
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Show when=is_open>
            <div id="adminPanel" class="admin-panel" role="dialog" aria-label="Admin">
                <div class="admin-header">
                    <h2>"Admin"</h2>
                    <button
                        id="adminClose"
                        type="button"
                        on:click=move |_| {
                            ctx.update(|board| board.toggle_admin());
                        }
                    >
                        "Close"
                    </button>
                </div>

                <button
                    id="volumeTest"
                    type="button"
                    on:click=move |_| ctx.with_untracked(|board| board.test_volume())
                >
                    "Test volume"
                </button>

                <form class="add-response-form" on:submit=add_response>
                    <input
                        id="newResponseText"
                        type="text"
                        placeholder="New response..."
                        prop:value=move || new_text.get()
                        on:input=move |ev| {
                            if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                                set_new_text.set(input.value());
                            }
                        }
                    />
                    <button id="addResponse" type="submit" disabled=is_full>"Add"</button>
                    <span class="capacity-hint">{capacity_hint}</span>
                </form>

                <div id="responseList" class="response-list">
                    <For
                        each=entries
                        key=|(index, entry)| (*index, entry.id)
                        children=move |(index, entry)| {
                            let removable = !entry.is_default;
                            let label = entry.text.clone();
                            view! {
                                <div class="response-row">
                                    <span>{entry.text}</span>
                                    {removable.then(|| view! {
                                        <DeleteConfirmButton
                                            label=label.clone()
                                            on_confirm=Callback::new(move |_| {
                                                if let Some(Err(e)) = ctx.update(|board| board.remove_response(index)) {
                                                    log::debug!("[ADMIN] remove rejected: {}", e);
                                                }
                                            })
                                        />
                                    })}
                                </div>
                            }
                        }
                    />
                </div>

                <SpeechSettingsForm />
                <Show when=logged_in>
                    <BrandingSettings />
                </Show>
                <DiagnosticsLog />
            </div>
        </Show>
    }
}
