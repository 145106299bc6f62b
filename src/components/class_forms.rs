//! Class Forms
//!
//! Adding a class to a project and renaming an existing one. Both look the
//! project configuration up again on every edit.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::editable::EditToggle;
use crate::components::form_warning::{FieldWarning, DANGER_CLASS};
use crate::config;
use crate::dom::HIDDEN_CLASS;
use crate::models::ProjectConfig;
use crate::sequencer::RequestSequence;
use crate::validation::{check_class_rename, check_new_class, FieldCheck, Warning};

/// Outcome known without the project config; only then is the backend asked
fn check_without_config(value: &str, renaming: bool) -> Option<FieldCheck> {
    match (value.is_empty(), renaming) {
        (false, _) => None,
        (true, false) => Some(FieldCheck::neutral()),
        (true, true) => Some(FieldCheck::fail(Warning::ClassNameEmpty)),
    }
}

/// Fetch the config after the debounce and hand it to `apply` if still current
fn with_fresh_config(
    sequence: &RequestSequence,
    project_name: String,
    apply: impl FnOnce(&ProjectConfig) + 'static,
) {
    let ticket = sequence.issue();
    spawn_local(async move {
        if !ticket.settle(config::get().debounce_ms).await {
            return;
        }
        match commands::get_project_config(&project_name).await {
            Ok(project) if ticket.is_current() => apply(&project),
            Ok(_) => {}
            Err(err) => log::warn!("[classes] config for {}: {}", project_name, err),
        }
    });
}

/// Form for adding a class
#[component]
pub fn AddClassForm(
    #[prop(into)] project_name: String,
    #[prop(into)] action: String,
) -> impl IntoView {
    let class_name = RwSignal::new(String::new());
    let check = RwSignal::new(FieldCheck::neutral());
    let sequence = RequestSequence::new();

    let on_input = move |value: String| {
        class_name.set(value.clone());
        if let Some(known) = check_without_config(&value, false) {
            sequence.invalidate();
            check.set(known);
            return;
        }
        with_fresh_config(&sequence, project_name.clone(), move |project| {
            check.set(check_new_class(&value, project));
        });
    };

    view! {
        <form class="uk-grid-small" method="post" action=action>
            <div class="uk-width-expand">
                <input
                    type="text"
                    id="newClassName"
                    name="className"
                    class="uk-input"
                    class=(DANGER_CLASS, move || check.get().warning.is_some())
                    placeholder="New class name"
                    autocomplete="off"
                    prop:value=move || class_name.get()
                    on:input=move |ev| on_input(event_target_value(&ev))
                />
                <FieldWarning id="newClassNameLabel" check=check />
            </div>
            <div class="uk-width-auto">
                <button
                    type="submit"
                    id="addClass"
                    class="uk-button uk-button-primary"
                    disabled=move || check.get().blocking
                >
                    <span uk-icon="icon: plus"></span>
                    " Add class"
                </button>
            </div>
        </form>
    }
}

/// Class name with an inline rename form
#[component]
pub fn ClassNameEditor(
    #[prop(into)] project_name: String,
    index: usize,
    #[prop(into)] class_name: String,
    #[prop(into)] action: String,
) -> impl IntoView {
    let toggle = RwSignal::new(EditToggle::new(class_name));
    let check = RwSignal::new(FieldCheck::ok());
    let sequence = RequestSequence::new();
    let pending = sequence.clone();

    let on_input = move |value: String| {
        toggle.update(|t| t.set_value(value.clone()));
        if let Some(known) = check_without_config(&value, true) {
            sequence.invalidate();
            check.set(known);
            return;
        }
        let original = toggle.with_untracked(|t| t.original.clone());
        with_fresh_config(&sequence, project_name.clone(), move |project| {
            check.set(check_class_rename(&value, &original, project));
        });
    };

    // A check still in flight must not land on the restored name
    let cancel = move |_: web_sys::MouseEvent| {
        pending.invalidate();
        toggle.update(EditToggle::cancel);
        check.set(FieldCheck::ok());
    };

    view! {
        <div id=format!("classShow{}", index) class=(HIDDEN_CLASS, move || toggle.get().editing)>
            <span class="uk-text-bold">{move || toggle.get().original}</span>
            " "
            <a uk-icon="icon: pencil" on:click=move |_| toggle.update(EditToggle::enter)></a>
        </div>

        <div id=format!("classEdit{}", index) class=(HIDDEN_CLASS, move || !toggle.get().editing)>
            <form method="post" action=action>
                <input type="hidden" name="originalClassName" prop:value=move || toggle.get().original />
                <div class="uk-inline">
                    <input
                        type="text"
                        id=format!("editClassName{}", index)
                        name="className"
                        class="uk-input uk-form-small"
                        class=(DANGER_CLASS, move || check.get().warning.is_some())
                        autocomplete="off"
                        prop:value=move || toggle.get().value
                        on:input=move |ev| on_input(event_target_value(&ev))
                    />
                </div>
                <button
                    type="submit"
                    id=format!("submitEditClass{}", index)
                    class="uk-button uk-button-primary uk-button-small"
                    disabled=move || check.get().blocking
                >
                    "Save"
                </button>
                <button type="button" class="uk-button uk-button-default uk-button-small" on:click=cancel>
                    "Cancel"
                </button>
                <FieldWarning id=format!("editClassNameLabel{}", index) check=check />
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_new_class_is_neutral_at_once() {
        assert_eq!(check_without_config("", false), Some(FieldCheck::neutral()));
        assert_eq!(check_without_config("dog", false), None);
    }

    #[test]
    fn test_empty_rename_blocks_at_once() {
        let known = check_without_config("", true).unwrap();
        assert_eq!(known.warning, Some(Warning::ClassNameEmpty));
        assert!(known.blocking);
        assert_eq!(check_without_config("dog", true), None);
    }

    #[test]
    fn test_cancel_voids_check_started_while_typing() {
        let sequence = RequestSequence::new();
        let pending = sequence.clone();
        let typed = sequence.issue();

        pending.invalidate();
        assert!(!typed.is_current());
    }
}
