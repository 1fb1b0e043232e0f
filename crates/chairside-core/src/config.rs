//! Board Configuration
//!
//! Defaults match the shipped dental board. Every field has a default so a
//! partial JSON config is valid.

use serde::{Deserialize, Serialize};

/// Speech rate/volume applied to every utterance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechSettings {
    pub rate: f32,
    pub volume: f32,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            rate: 1.0,
            volume: 1.0,
        }
    }
}

impl SpeechSettings {
    pub const MIN_RATE: f32 = 0.1;
    pub const MAX_RATE: f32 = 10.0;

    /// Clamp into the range speech engines accept
    pub fn clamped(self) -> Self {
        let rate = if self.rate.is_finite() { self.rate } else { 1.0 };
        let volume = if self.volume.is_finite() { self.volume } else { 1.0 };
        Self {
            rate: rate.clamp(Self::MIN_RATE, Self::MAX_RATE),
            volume: volume.clamp(0.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Prefix for every storage key (e.g., "dental" -> "dentalCurrentDentist")
    pub storage_prefix: String,
    /// Hard cap on responses, defaults included
    pub max_responses: usize,
    /// Non-deletable phrases seeded first
    pub default_responses: Vec<String>,
    pub grid_columns: u8,
    /// When false the board runs without a practitioner identity
    pub require_login: bool,
    pub speech: SpeechSettings,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_prefix: "dental".to_string(),
            max_responses: 8,
            default_responses: vec!["Yes".to_string(), "No".to_string()],
            grid_columns: 2,
            require_login: true,
            speech: SpeechSettings::default(),
        }
    }
}

impl BoardConfig {
    /// Parse a JSON config, falling back to defaults on malformed input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<BoardConfig>(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[CONFIG] invalid board config, using defaults: {}", e);
                Self::default()
            }
        }
    }
}
