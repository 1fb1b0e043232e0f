//! Board Application State
//!
//! The single state struct the UI holds in context. Event handlers call
//! into it, then re-render from its accessors.

use std::rc::Rc;

use crate::config::{BoardConfig, SpeechSettings};
use crate::domain::{BoardError, BrandingConfig, ResponseEntry, ResponseList, SessionError, StorageError};
use crate::repository::{ConfigRepository, KeyValueStore, StorageKeys};
use crate::session::Session;
use crate::speech::{SpeechOutput, Utterance};
use crate::store::ResponseStore;

pub const STATUS_READY: &str = "Text-to-speech ready. Use arrow keys to navigate, Enter to select.";
pub const STATUS_UNSUPPORTED: &str = "Text-to-speech not supported in this browser";
pub const VOLUME_TEST_PHRASE: &str = "Yes, No";

/// Keyboard navigation commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Prev,
    /// Speak and announce the current selection
    Activate,
}

impl NavCommand {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "ArrowDown" => Some(Self::Next),
            "ArrowLeft" | "ArrowUp" => Some(Self::Prev),
            "Enter" | " " | "Spacebar" => Some(Self::Activate),
            _ => None,
        }
    }
}

pub struct BoardApp {
    config: BoardConfig,
    session: Session,
    store: ResponseStore,
    speech: Box<dyn SpeechOutput>,
    settings: SpeechSettings,
    admin_open: bool,
    instructions_open: bool,
    brand_color: Option<String>,
    brand_logo: Option<String>,
    status: String,
}

impl BoardApp {
    /// Build the board and resume any remembered session
    pub fn new(config: BoardConfig, storage: Rc<dyn KeyValueStore>, speech: Box<dyn SpeechOutput>) -> Self {
        let repo = ConfigRepository::new(storage, StorageKeys::new(config.storage_prefix.as_str()));
        let settings = repo
            .load_speech_settings()
            .unwrap_or(config.speech)
            .clamped();
        let session = Session::restore(repo);
        let store = ResponseStore::detached(ResponseList::new(&config.default_responses, config.max_responses));

        // Reported once; every later speak() on NullSpeech is silent
        let status = if speech.is_supported() {
            STATUS_READY
        } else {
            log::warn!("[BOARD] speech synthesis unavailable");
            STATUS_UNSUPPORTED
        };

        let mut app = Self {
            config,
            session,
            store,
            speech,
            settings,
            admin_open: false,
            instructions_open: false,
            brand_color: None,
            brand_logo: None,
            status: status.to_string(),
        };
        app.load_session_board();
        app.store.select(0);
        app
    }

    fn anonymous_board(&self) -> bool {
        !self.config.require_login
    }

    fn load_session_board(&mut self) {
        if self.session.is_authenticated() {
            let branding = self.session.branding();
            self.apply_branding(&branding);
        } else if self.anonymous_board() {
            if let Some(legacy) = self.session.repository().load_legacy_responses() {
                self.store.load(legacy);
            }
        }
        let persistence = self.session.persistence(self.anonymous_board());
        self.store.set_persistence(persistence);
    }

    /// Apply whichever branding fields are present
    pub fn apply_branding(&mut self, config: &BrandingConfig) {
        if let Some(color) = &config.brand_color {
            self.brand_color = Some(color.clone());
        }
        if let Some(logo) = &config.brand_logo {
            self.brand_logo = Some(logo.clone());
        }
        self.store.set_branding(config);
    }

    // ========================
    // Session
    // ========================

    /// Whether the board (rather than the login panel) is shown
    pub fn board_visible(&self) -> bool {
        self.session.is_authenticated() || self.anonymous_board()
    }

    pub fn identity(&self) -> Option<&str> {
        self.session.identity()
    }

    pub fn login(&mut self, identifier: &str) -> Result<(), SessionError> {
        let branding = self.session.login(identifier)?;
        self.apply_branding(&branding);
        let persistence = self.session.persistence(self.anonymous_board());
        self.store.set_persistence(persistence);
        self.store.select(0);
        Ok(())
    }

    /// Clear the remembered identity; the caller reloads the page
    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.session.logout()
    }

    // ========================
    // Navigation
    // ========================

    /// Handle a keyboard command. Returns false when navigation is gated
    /// (admin panel open or board hidden).
    pub fn handle(&mut self, command: NavCommand) -> bool {
        if self.admin_open || !self.board_visible() {
            return false;
        }
        match command {
            NavCommand::Next => {
                self.store.next();
            }
            NavCommand::Prev => {
                self.store.prev();
            }
            NavCommand::Activate => self.activate_current(),
        }
        true
    }

    pub fn select(&mut self, index: isize) -> usize {
        self.store.select(index)
    }

    /// Tile click: select, speak, announce
    pub fn activate(&mut self, index: usize) {
        self.store.select(index as isize);
        self.activate_current();
    }

    fn activate_current(&mut self) {
        let Some(text) = self.store.list().current().map(|e| e.text.clone()) else {
            return;
        };
        self.speak(&text);
        self.status = format!("Selected: {}", text);
    }

    pub fn speak(&self, text: &str) {
        self.speech.speak(&Utterance::new(text, self.settings));
    }

    pub fn test_volume(&self) {
        self.speak(VOLUME_TEST_PHRASE);
    }

    // ========================
    // Admin
    // ========================

    pub fn toggle_admin(&mut self) -> bool {
        self.admin_open = !self.admin_open;
        self.admin_open
    }

    pub fn toggle_instructions(&mut self) -> bool {
        self.instructions_open = !self.instructions_open;
        self.instructions_open
    }

    pub fn add_response(&mut self, text: &str) -> Result<ResponseEntry, BoardError> {
        self.store.add(text)
    }

    pub fn remove_response(&mut self, index: usize) -> Result<ResponseEntry, BoardError> {
        self.store.remove(index)
    }

    pub fn set_brand_color(&mut self, color: &str) -> Result<(), StorageError> {
        let color = color.trim().to_string();
        self.session
            .update_branding(|c| c.brand_color = Some(color.clone()))?;
        self.brand_color = Some(color);
        Ok(())
    }

    pub fn set_brand_logo(&mut self, data_url: &str) -> Result<(), StorageError> {
        let logo = data_url.to_string();
        self.session
            .update_branding(|c| c.brand_logo = Some(logo.clone()))?;
        self.brand_logo = Some(logo);
        Ok(())
    }

    pub fn set_speech_settings(&mut self, settings: SpeechSettings) -> Result<(), StorageError> {
        self.settings = settings.clamped();
        self.session.repository().save_speech_settings(&self.settings)
    }

    // ========================
    // Accessors for rendering
    // ========================

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn responses(&self) -> &[ResponseEntry] {
        self.store.list().entries()
    }

    pub fn selected(&self) -> usize {
        self.store.list().selected()
    }

    pub fn is_full(&self) -> bool {
        self.store.list().is_full()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }

    pub fn is_admin_open(&self) -> bool {
        self.admin_open
    }

    pub fn is_instructions_open(&self) -> bool {
        self.instructions_open
    }

    pub fn brand_color(&self) -> Option<&str> {
        self.brand_color.as_deref()
    }

    pub fn brand_logo(&self) -> Option<&str> {
        self.brand_logo.as_deref()
    }

    pub fn speech_settings(&self) -> SpeechSettings {
        self.settings
    }

    pub fn speech_supported(&self) -> bool {
        self.speech.is_supported()
    }
}
