//! Page Helpers
//!
//! Direct DOM work on the server-rendered page around the mounted widgets.

use leptos::prelude::{document, window};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// UIkit class that hides an element
pub const HIDDEN_CLASS: &str = "uk-hidden";
/// Marker class on every element that only applies to temporal projects
pub const TEMPORAL_CLASS: &str = "temporal";

/// Show or hide every element carrying `marker`
pub fn set_hidden_by_class(marker: &str, hidden: bool) {
    let elements = document().get_elements_by_class_name(marker);
    for i in 0..elements.length() {
        if let Some(element) = elements.item(i) {
            if let Err(err) = element.class_list().toggle_with_force(HIDDEN_CLASS, hidden) {
                log::warn!("[dom] could not toggle .{}: {:?}", marker, err);
            }
        }
    }
}

pub fn navigate(url: &str) {
    log::info!("[dom] navigating to {}", url);
    if let Err(err) = window().location().set_href(url) {
        log::error!("[dom] navigation to {} failed: {:?}", url, err);
    }
}

pub fn reload() {
    if let Err(err) = window().location().reload() {
        log::error!("[dom] reload failed: {:?}", err);
    }
}

/// Native confirm dialog; a blocked dialog counts as "no"
pub fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

/// True for the Enter key, whichever way the browser reports it
pub fn is_enter_key(key: &str, key_code: u32) -> bool {
    key == "Enter" || key_code == 13
}

/// Stop Enter in single-line text inputs from submitting the surrounding form,
/// so picking an autocomplete entry with the keyboard doesn't post it.
pub fn suppress_enter_in_text_inputs() -> Result<(), JsValue> {
    let handler = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(|ev: web_sys::KeyboardEvent| {
        if !is_enter_key(&ev.key(), ev.key_code()) {
            return;
        }
        let is_text_input = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            .map(|input| input.type_() == "text")
            .unwrap_or(false);
        if is_text_input {
            ev.prevent_default();
        }
    });
    window().add_event_listener_with_callback_and_bool("keydown", handler.as_ref().unchecked_ref(), true)?;
    handler.forget();
    Ok(())
}
