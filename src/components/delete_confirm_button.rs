//! Delete Confirm Button Component
//!
//! Inline remove button that asks once before acting.

use leptos::prelude::*;

/// Inline remove confirmation button
///
/// Shows a × button initially. When clicked, shows "Remove?" with ✓/✗ buttons.
///
/// # Arguments
/// * `label` - Accessible name of the entry being removed
/// * `on_confirm` - Callback to execute when the user confirms removal
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);
    let aria_label = format!("Remove {}", label);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || {
                let aria_label = aria_label.clone();
                view! {
                    <button
                        class="delete-btn"
                        type="button"
                        aria-label=aria_label
                        on:click=move |_| set_confirming.set(true)
                    >
                        "×"
                    </button>
                }
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Remove?"</span>
                <button class="confirm-btn" type="button" on:click=move |_| on_confirm.run(())>
                    "✓"
                </button>
                <button class="cancel-btn" type="button" on:click=move |_| set_confirming.set(false)>
                    "✗"
                </button>
            </span>
        </Show>
    }
}
