//! Speech Synthesis Adapter

use chairside_core::{NullSpeech, SpeechOutput, Utterance};
use wasm_bindgen::JsValue;

use super::has_property;

pub struct WebSpeech {
    synth: web_sys::SpeechSynthesis,
}

impl WebSpeech {
    /// `WebSpeech` when the browser exposes `speechSynthesis`, else `NullSpeech`
    pub fn detect() -> Box<dyn SpeechOutput> {
        let Some(win) = web_sys::window() else {
            return Box::new(NullSpeech);
        };
        if !has_property(&JsValue::from(win.clone()), "speechSynthesis") {
            return Box::new(NullSpeech);
        }
        match win.speech_synthesis() {
            Ok(synth) => Box::new(WebSpeech { synth }),
            Err(e) => {
                log::warn!("[SPEECH] speechSynthesis unavailable: {:?}", e);
                Box::new(NullSpeech)
            }
        }
    }
}

impl SpeechOutput for WebSpeech {
    fn speak(&self, utterance: &Utterance<'_>) {
        match web_sys::SpeechSynthesisUtterance::new_with_text(utterance.text) {
            Ok(utter) => {
                utter.set_rate(utterance.rate);
                utter.set_volume(utterance.volume);
                self.synth.speak(&utter);
            }
            Err(e) => log::warn!("[SPEECH] could not build utterance: {:?}", e),
        }
    }
}
