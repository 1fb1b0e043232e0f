//! Status Bar Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Live region announcing the last spoken response
#[component]
pub fn StatusBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let message = move || ctx.with(|board| board.status().to_string());

    view! {
        <div id="statusMessage" class="status-message" role="status" aria-live="polite">
            {message}
        </div>
    }
}
