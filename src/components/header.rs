//! Header Component
//!
//! Practice logo and title plus the instructions / admin / logout controls.

use leptos::prelude::*;

use crate::browser;
use crate::context::AppContext;

pub const APP_TITLE: &str = "Chairside";

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let logo = move || ctx.with(|board| board.brand_logo().map(str::to_string));
    let title = move || match ctx.with(|board| board.identity().map(str::to_string)) {
        Some(identity) => format!("{} - {}", APP_TITLE, identity),
        None => APP_TITLE.to_string(),
    };
    let board_visible = move || ctx.with(|board| board.board_visible());
    let logged_in = move || ctx.with(|board| board.identity().is_some());

    let logout = move |_| {
        if let Some(Err(e)) = ctx.update(|board| board.logout()) {
            log::warn!("[APP] logout could not clear the stored identity: {}", e);
        }
        browser::reload_page();
    };

    view! {
        <header class="app-header">
            {move || logo().map(|src| view! {
                <img id="headerLogo" class="header-logo" src=src alt="Practice logo" />
            })}
            <h1 id="headerTitle">{title}</h1>

            <nav class="header-controls">
                <button
                    id="instructionsToggle"
                    type="button"
                    on:click=move |_| {
                        ctx.update(|board| board.toggle_instructions());
                    }
                >
                    "Instructions"
                </button>
                <Show when=board_visible>
                    <button
                        id="adminToggle"
                        type="button"
                        on:click=move |_| {
                            ctx.update(|board| board.toggle_admin());
                        }
                    >
                        "Admin"
                    </button>
                </Show>
                <Show when=logged_in>
                    <button id="logoutButton" type="button" on:click=logout>
                        "Log out"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
