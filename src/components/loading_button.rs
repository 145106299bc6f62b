//! Loading Button Components
//!
//! Buttons and links that swap their icon for a spinner once triggered.

use leptos::prelude::*;

use crate::dom;

/// Button with a UIkit icon and a label.
///
/// While `loading` is set the icon becomes a spinner, the label becomes
/// `loading_label` and the button is disabled. With `href` the browser is sent
/// there on click.
///
/// # Arguments
/// * `icon` - UIkit icon name (e.g. "plus" or "check")
/// * `button_type` - "submit" inside forms, "button" otherwise
/// * `on_click` - Runs after the loading state is set
#[component]
pub fn LoadingButton(
    #[prop(into)] label: String,
    #[prop(into)] loading_label: String,
    #[prop(into)] icon: String,
    loading: RwSignal<bool>,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let icon_attr = format!("icon: {}", icon);

    view! {
        <button
            type=button_type
            id=id
            class="uk-button uk-button-primary"
            disabled=move || loading.get() || disabled.get()
            on:click=move |_| {
                if button_type == "submit" {
                    // The form's submit handler flips `loading`
                    return;
                }
                loading.set(true);
                if let Some(cb) = on_click {
                    cb.run(());
                }
                if let Some(url) = href.as_deref() {
                    dom::navigate(url);
                }
            }
        >
            {move || if loading.get() {
                view! { <span uk-spinner="ratio: 0.6"></span> }.into_any()
            } else {
                view! { <span uk-icon=icon_attr.clone()></span> }.into_any()
            }}
            " "
            <span>{move || if loading.get() { loading_label.clone() } else { label.clone() }}</span>
        </button>
    }
}

/// Link replaced by a spinner when followed
#[component]
pub fn LoadingLink(
    #[prop(into)] href: String,
    #[prop(into)] label: String,
) -> impl IntoView {
    let (loading, set_loading) = signal(false);

    view! {
        <a href=href on:click=move |_| set_loading.set(true)>
            {move || if loading.get() {
                view! { <span uk-spinner="ratio: 0.6"></span> }.into_any()
            } else {
                view! { <span>{label.clone()}</span> }.into_any()
            }}
        </a>
    }
}
