//! Branding Settings Component
//!
//! Practice colour and logo; saved into the logged-in identity's config.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::browser;
use crate::context::AppContext;

const DEFAULT_BRAND_COLOR: &str = "#2a7ab0";

#[component]
pub fn BrandingSettings() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let color = move || {
        ctx.with(|board| board.brand_color().unwrap_or(DEFAULT_BRAND_COLOR).to_string())
    };
    let logo = move || ctx.with(|board| board.brand_logo().map(str::to_string));

    let on_color = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return;
        };
        let value = input.value();
        if let Some(Err(e)) = ctx.update(|board| board.set_brand_color(&value)) {
            log::warn!("[BRANDING] colour not saved: {}", e);
        }
    };

    let on_logo = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let Some(file) = file else { return };
        let result = browser::read_data_url(&file, move |data_url| {
            if let Some(Err(e)) = ctx.update(|board| board.set_brand_logo(&data_url)) {
                log::warn!("[BRANDING] logo not saved: {}", e);
            }
        });
        if let Err(e) = result {
            log::warn!("[BRANDING] {}", e);
        }
    };

    view! {
        <fieldset class="branding-settings">
            <legend>"Branding"</legend>
            <label>
                "Colour "
                <input id="brandColor" type="color" prop:value=color on:change=on_color />
            </label>
            <label>
                "Logo "
                <input id="brandLogo" type="file" accept="image/*" on:change=on_logo />
            </label>
            {move || logo().map(|src| view! {
                <img id="logoPreview" class="logo-preview" src=src alt="Logo preview" />
            })}
        </fieldset>
    }
}
