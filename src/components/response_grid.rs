//! Response Grid Component
//!
//! One tile per response. The selected tile is highlighted and receives
//! focus from the app-level focus effect.

use leptos::prelude::*;

use crate::context::AppContext;

/// Id prefix shared by every tile
pub const RESPONSE_BUTTON_PREFIX: &str = "response-btn-";

/// Element id of the tile at `index`
pub fn response_button_id(index: usize) -> String {
    format!("{}{}", RESPONSE_BUTTON_PREFIX, index)
}

#[component]
pub fn ResponseGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let tiles = move || {
        ctx.with(|board| {
            board
                .responses()
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };
    let grid_style = move || {
        let columns = ctx.with(|board| board.config().grid_columns.max(1));
        format!("grid-template-columns: repeat({}, 1fr);", columns)
    };

    view! {
        <div id="responseGrid" class="response-grid" style=grid_style>
            <For
                each=tiles
                key=|(index, entry)| (*index, entry.id)
                children=move |(index, entry)| {
                    let is_selected = move || ctx.with(|board| board.selected() == index);
                    let tile_class = move || {
                        if is_selected() { "response-btn selected" } else { "response-btn" }
                    };
                    view! {
                        <button
                            id=response_button_id(index)
                            class=tile_class
                            type="button"
                            tabindex="0"
                            aria-pressed=move || is_selected().to_string()
                            on:click=move |_| {
                                ctx.update(|board| board.activate(index));
                            }
                        >
                            {entry.text}
                        </button>
                    }
                }
            />
        </div>
    }
}
