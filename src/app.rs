//! Chairside Frontend App
//!
//! Builds the board state, binds the keyboard surface and lays out the
//! header, board and overlays.

use std::rc::Rc;

use leptos::prelude::*;

use chairside_core::{BoardApp, BoardConfig, KeyValueStore, MemoryStore, NavCommand};

use crate::browser::{self, BrowserStorage, WebSpeech};
use crate::components::{
    response_button_id, AdminPanel, Header, InstructionsPanel, LoginPanel, ResponseGrid, StatusBar, RESPONSE_BUTTON_PREFIX,
};
use crate::context::AppContext;

fn open_storage() -> Rc<dyn KeyValueStore> {
    match BrowserStorage::open() {
        Some(storage) => Rc::new(storage),
        None => {
            log::warn!("[APP] localStorage unavailable, changes will not survive a reload");
            Rc::new(MemoryStore::new())
        }
    }
}

/// Board settings compiled into the app; edit `board.json` to reconfigure
const BOARD_CONFIG_JSON: &str = include_str!("../board.json");

fn board_config() -> BoardConfig {
    BoardConfig::from_json(BOARD_CONFIG_JSON)
}

fn build_board() -> BoardApp {
    let board = BoardApp::new(board_config(), open_storage(), WebSpeech::detect());
    log::info!(
        "[APP] board ready: {} responses, identity={:?}",
        board.responses().len(),
        board.identity()
    );
    board
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(build_board());
    provide_context(ctx);

    // Keyboard surface; gated inside BoardApp::handle while admin is open
    leptos_keynav::bind_global_keydown(RESPONSE_BUTTON_PREFIX, move |key| {
        NavCommand::from_key(key).is_some_and(|command| ctx.handle(command))
    });

    // Focus follows the selection while the board has the keyboard
    leptos_keynav::follow_focus(
        move || {
            ctx.with(|board| {
                (board.board_visible() && !board.is_admin_open()).then(|| board.selected())
            })
        },
        response_button_id,
    );

    // Practice colour
    Effect::new(move |_| {
        if let Some(color) = ctx.with(|board| board.brand_color().map(str::to_string)) {
            browser::apply_brand_color(&color);
        }
    });

    let board_visible = move || ctx.with(|board| board.board_visible());

    view! {
        <div class="app-layout">
            <Header />
            <InstructionsPanel />

            <main class="main-content">
                <Show
                    when=board_visible
                    fallback=|| view! { <LoginPanel /> }
                >
                    <ResponseGrid />
                </Show>
                <StatusBar />
            </main>

            <AdminPanel />
        </div>
    }
}
