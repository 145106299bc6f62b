//! Field Warning Label
//!
//! Inline warning under a form field. Inputs pair it with the `uk-form-danger` class.

use leptos::prelude::*;

use crate::validation::FieldCheck;

/// CSS class put on an input while its field shows a warning
pub const DANGER_CLASS: &str = "uk-form-danger";

#[component]
pub fn FieldWarning(
    #[prop(into)] check: Signal<FieldCheck>,
    #[prop(optional, into)] id: Option<String>,
) -> impl IntoView {
    view! {
        <label class="uk-text-danger uk-text-small" id=id>
            {move || check.get().message()}
        </label>
    }
}
