//! Speech Settings Component
//!
//! Rate and volume sliders, persisted on change.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use chairside_core::SpeechSettings;

use crate::context::AppContext;

fn slider_value(ev: &web_sys::Event) -> Option<f32> {
    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.value().parse().ok()
}

#[component]
pub fn SpeechSettingsForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let settings = move || ctx.with(|board| board.speech_settings());
    let save = move |settings: SpeechSettings| {
        if let Some(Err(e)) = ctx.update(|board| board.set_speech_settings(settings)) {
            log::warn!("[ADMIN] speech settings not saved: {}", e);
        }
    };

    view! {
        <fieldset class="speech-settings">
            <legend>"Voice"</legend>
            <label>
                "Rate " {move || format!("{:.1}", settings().rate)}
                <input
                    id="speechRate"
                    type="range"
                    min=SpeechSettings::MIN_RATE.to_string()
                    max="2"
                    step="0.1"
                    prop:value=move || settings().rate.to_string()
                    on:change=move |ev| {
                        if let Some(rate) = slider_value(&ev) {
                            save(SpeechSettings { rate, ..settings() });
                        }
                    }
                />
            </label>
            <label>
                "Volume " {move || format!("{:.0}%", settings().volume * 100.0)}
                <input
                    id="speechVolume"
                    type="range"
                    min="0"
                    max="1"
                    step="0.05"
                    prop:value=move || settings().volume.to_string()
                    on:change=move |ev| {
                        if let Some(volume) = slider_value(&ev) {
                            save(SpeechSettings { volume, ..settings() });
                        }
                    }
                />
            </label>
        </fieldset>
    }
}
