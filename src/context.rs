//! Application Context
//!
//! The board state struct, shared via Leptos Context API.

use leptos::prelude::*;

use chairside_core::{BoardApp, NavCommand};

/// Board state plus a version counter that components track to re-render
#[derive(Clone, Copy)]
pub struct AppContext {
    board: StoredValue<BoardApp, LocalStorage>,
    /// Bumped after every mutation - read
    pub version: ReadSignal<u32>,
    /// Bumped after every mutation - write
    set_version: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(board: BoardApp) -> Self {
        let (version, set_version) = signal(0u32);
        Self {
            board: StoredValue::new_local(board),
            version,
            set_version,
        }
    }

    /// Read board state; subscribes the caller to later mutations
    pub fn with<R>(&self, f: impl FnOnce(&BoardApp) -> R) -> R {
        self.version.track();
        self.board.with_value(f)
    }

    /// Read board state without subscribing
    pub fn with_untracked<R>(&self, f: impl FnOnce(&BoardApp) -> R) -> R {
        self.board.with_value(f)
    }

    /// Route a keyboard command; re-renders only when it was handled
    pub fn handle(&self, command: NavCommand) -> bool {
        let handled = self
            .board
            .try_update_value(|board| board.handle(command))
            .unwrap_or(false);
        if handled {
            self.set_version.update(|v| *v += 1);
        }
        handled
    }

    /// Mutate board state and trigger a re-render
    pub fn update<R>(&self, f: impl FnOnce(&mut BoardApp) -> R) -> Option<R> {
        let result = self.board.try_update_value(f);
        self.set_version.update(|v| *v += 1);
        result
    }
}
