//! Speech Capability
//!
//! The board speaks through this trait. When the platform has no speech
//! synthesis, `NullSpeech` is injected at startup so callers never branch
//! on support.

use crate::config::SpeechSettings;

/// One phrase to speak
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Utterance<'a> {
    pub text: &'a str,
    pub rate: f32,
    pub volume: f32,
}

impl<'a> Utterance<'a> {
    pub fn new(text: &'a str, settings: SpeechSettings) -> Self {
        Self {
            text,
            rate: settings.rate,
            volume: settings.volume,
        }
    }
}

/// Fire-and-forget speech output
pub trait SpeechOutput {
    fn is_supported(&self) -> bool {
        true
    }

    fn speak(&self, utterance: &Utterance<'_>);
}

/// Stand-in when synthesis is unavailable
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSpeech;

impl SpeechOutput for NullSpeech {
    fn is_supported(&self) -> bool {
        false
    }

    fn speak(&self, _utterance: &Utterance<'_>) {}
}
