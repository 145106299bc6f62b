//! Tag Editor Components
//!
//! Creating tags and renaming them inline. Tag names come with the page, so
//! these checks need no backend round trip.

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::components::editable::EditToggle;
use crate::components::form_warning::{FieldWarning, DANGER_CLASS};
use crate::dom::HIDDEN_CLASS;
use crate::validation::{check_tag_name, FieldCheck};

fn check_against(value: &str, original: &str, tags: &BTreeMap<String, String>) -> FieldCheck {
    check_tag_name(value, original, tags.values().map(String::as_str))
}

/// Form for creating a tag
#[component]
pub fn NewTagForm(
    /// Tag index -> name of every tag of the project
    tags: BTreeMap<String, String>,
    #[prop(into)] action: String,
) -> impl IntoView {
    let value = RwSignal::new(String::new());
    let check = RwSignal::new(FieldCheck::neutral());

    view! {
        <form class="uk-grid-small" method="post" action=action>
            <div class="uk-width-expand">
                <input
                    type="text"
                    id="newTagName"
                    name="newTagName"
                    class="uk-input"
                    class=(DANGER_CLASS, move || check.get().warning.is_some())
                    placeholder="New tag name"
                    autocomplete="off"
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        check.set(check_against(&text, "", &tags));
                        value.set(text);
                    }
                />
                <FieldWarning id="newTagNameError" check=check />
            </div>
            <div class="uk-width-auto">
                <button type="submit" id="createTag" class="uk-button uk-button-primary" disabled=move || check.get().blocking>
                    <span uk-icon="icon: plus"></span>
                    " Add tag"
                </button>
            </div>
        </form>
    }
}

/// One tag of the project with its rename form
#[component]
pub fn TagRow(
    /// Tag index within the project
    index: u32,
    #[prop(into)] name: String,
    tags: BTreeMap<String, String>,
    #[prop(into)] action: String,
) -> impl IntoView {
    let toggle = RwSignal::new(EditToggle::new(name));
    let check = RwSignal::new(FieldCheck::ok());

    let cancel = move |_: web_sys::MouseEvent| {
        check.set(FieldCheck::ok());
        toggle.update(EditToggle::cancel);
    };

    view! {
        <div id=format!("tagShow{}", index) class=(HIDDEN_CLASS, move || toggle.get().editing)>
            <span uk-icon="icon: tag"></span>
            " "
            <span>{move || toggle.get().original}</span>
            " "
            <a uk-icon="icon: pencil" on:click=move |_| toggle.update(EditToggle::enter)></a>
        </div>

        <div id=format!("tagEdit{}", index) class=(HIDDEN_CLASS, move || !toggle.get().editing)>
            <form method="post" action=action>
                <input type="hidden" name="tagIdx" value=index.to_string() />
                <input
                    type="text"
                    id=format!("tag{}", index)
                    name="tagName"
                    class="uk-input uk-form-small"
                    class=(DANGER_CLASS, move || check.get().warning.is_some())
                    autocomplete="off"
                    prop:value=move || toggle.get().value
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        let original = toggle.with_untracked(|t| t.original.clone());
                        check.set(check_against(&text, &original, &tags));
                        toggle.update(|t| t.set_value(text));
                    }
                />
                <button
                    type="submit"
                    id=format!("saveTag{}", index)
                    class="uk-button uk-button-primary uk-button-small"
                    disabled=move || check.get().blocking
                >
                    "Save"
                </button>
                <button type="button" class="uk-button uk-button-default uk-button-small" on:click=cancel>
                    "Cancel"
                </button>
                <FieldWarning id=format!("tagEditError{}", index) check=check />
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Warning;

    fn project_tags() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("1".to_string(), "sitting".to_string()),
            ("2".to_string(), "standing".to_string()),
        ])
    }

    #[test]
    fn test_rename_checks_against_project_tags() {
        let tags = project_tags();
        assert_eq!(check_against("standing", "sitting", &tags).warning, Some(Warning::TagExists));
        assert_eq!(check_against("sitting", "sitting", &tags), FieldCheck::ok());
        assert_eq!(check_against("Background", "sitting", &tags).warning, Some(Warning::ReservedName));
    }

    #[test]
    fn test_creation_uses_empty_original() {
        let tags = project_tags();
        assert_eq!(check_against("sitting", "", &tags).warning, Some(Warning::TagExists));
        assert_eq!(check_against("", "", &tags), FieldCheck::neutral());
    }
}
