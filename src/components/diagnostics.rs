//! Diagnostics Log Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Recent log lines from the rolling logger, newest last
#[component]
pub fn DiagnosticsLog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (refresh, set_refresh) = signal(0u32);

    let lines = move || {
        refresh.track();
        ctx.version.track();
        rolling_logger::recent_lines()
    };

    view! {
        <details class="diagnostics">
            <summary>"Diagnostics"</summary>
            <button type="button" on:click=move |_| set_refresh.update(|v| *v += 1)>
                "Refresh"
            </button>
            <ul class="diagnostics-lines">
                {move || lines().into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ul>
        </details>
    }
}
