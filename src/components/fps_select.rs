//! Model FPS Select
//!
//! Changing the frame rate rewrites existing annotations, so it asks first.

use leptos::prelude::*;

use crate::dom;

const CHANGE_FPS_WARNING: &str = "Are you sure you want to change the model fps? \
Your existing annotations will be converted to the new frame rate, \
but some information might get lost or be inaccurate. \
Please make sure to check the annotations after this operation.";

#[component]
pub fn FpsSelect(
    #[prop(into)] name: String,
    options: Vec<u32>,
    /// Frame rate the model currently uses
    current: u32,
) -> impl IntoView {
    let value = RwSignal::new(current);

    let on_change = move |raw: String| {
        let Ok(fps) = raw.parse::<u32>() else {
            return;
        };
        if dom::confirm(CHANGE_FPS_WARNING) {
            // Conversion is not wired up on the backend yet
            log::info!("[fps] change from {} to {} confirmed", current, fps);
            value.set(fps);
        } else {
            // Re-setting forces the select back even though the value is unchanged
            value.set(current);
        }
    };

    view! {
        <select
            class="uk-select uk-form-small uk-form-width-small"
            name=name
            prop:value=move || value.get().to_string()
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            {options.into_iter().map(|fps| view! {
                <option value=fps.to_string()>{fps}</option>
            }).collect_view()}
        </select>
    }
}
