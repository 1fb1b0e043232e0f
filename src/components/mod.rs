//! UI Components
//!
//! Leptos components for the board, its overlays and the login screen.

mod admin_panel;
mod branding_settings;
mod delete_confirm_button;
mod diagnostics;
mod header;
mod instructions_panel;
mod login_panel;
mod response_grid;
mod speech_settings;
mod status_bar;

pub use admin_panel::AdminPanel;
pub use branding_settings::BrandingSettings;
pub use delete_confirm_button::DeleteConfirmButton;
pub use diagnostics::DiagnosticsLog;
pub use header::Header;
pub use instructions_panel::InstructionsPanel;
pub use login_panel::LoginPanel;
pub use response_grid::{response_button_id, ResponseGrid, RESPONSE_BUTTON_PREFIX};
pub use speech_settings::SpeechSettingsForm;
pub use status_bar::StatusBar;
