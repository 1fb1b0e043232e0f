//! Instructions Panel Component

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn InstructionsPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let panel_class = move || {
        if ctx.with(|board| board.is_instructions_open()) {
            "instructions-panel"
        } else {
            "instructions-panel hidden"
        }
    };

    view! {
        <section id="instructionsPanel" class=panel_class>
            <h2>"How to use"</h2>
            <ul>
                <li>"Arrow keys move between responses."</li>
                <li>"Enter or Space speaks the highlighted response."</li>
                <li>"Click or tap a response to speak it."</li>
                <li>"Admin adds or removes custom responses and adjusts the voice."</li>
            </ul>
        </section>
    }
}
