//! Project Forms
//!
//! Creating, importing and relocating projects. Every edit re-asks the backend
//! about the typed location and re-runs the matching check.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::form_warning::{FieldWarning, DANGER_CLASS};
use crate::components::loading_button::LoadingButton;
use crate::components::path_autocomplete::{PathAutocomplete, SuggestionMode};
use crate::config;
use crate::sequencer::RequestSequence;
use crate::validation::{check_new_project, check_project_path, FieldCheck, NewProjectCheck};

/// Form for creating a new project directory
#[component]
pub fn NewProjectForm(#[prop(into)] action: String) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let path = RwSignal::new(String::new());
    let check = RwSignal::new(NewProjectCheck::default());
    let path_prefix = RwSignal::new(String::new());
    let project_dir = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let sequence = RequestSequence::new();

    let revalidate = Callback::new(move |_: ()| {
        let ticket = sequence.issue();
        let name_value = name.get_untracked();
        let path_value = path.get_untracked();
        spawn_local(async move {
            if !ticket.settle(config::get().debounce_ms).await {
                return;
            }
            match commands::browse_directory(&path_value, &name_value).await {
                Ok(browse) if ticket.is_current() => {
                    path_prefix.set(browse.project_path_prefix.clone());
                    project_dir.set(browse.project_dir.clone());
                    check.set(check_new_project(&name_value, &path_value, &browse));
                }
                Ok(_) => {}
                Err(err) => log::warn!("[new-project] {}", err),
            }
        });
    });

    view! {
        <form class="uk-form-stacked" method="post" action=action on:submit=move |_| submitting.set(true)>
            <div class="uk-margin">
                <label class="uk-form-label" for="newProjectName">"Project name"</label>
                <input
                    type="text"
                    id="newProjectName"
                    name="projectName"
                    class="uk-input"
                    class=(DANGER_CLASS, move || check.get().name.warning.is_some())
                    autocomplete="off"
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        name.set(event_target_value(&ev));
                        revalidate.run(());
                    }
                />
                <FieldWarning id="newProjectNameLabel" check=Signal::derive(move || check.get().name) />
            </div>

            <div class="uk-margin">
                <label class="uk-form-label" for="newProjectPath">"Location"</label>
                <PathAutocomplete
                    value=path
                    mode=SuggestionMode::Directories
                    name="path"
                    id="newProjectPath"
                    invalid=Signal::derive(move || check.get().path.warning.is_some())
                    on_change=move |_: String| revalidate.run(())
                />
                <FieldWarning id="newProjectPathLabel" check=Signal::derive(move || check.get().path) />
            </div>

            <div id="fullPath" class="uk-margin-small">
                <p>
                    {move || path_prefix.get()}
                    <span class="uk-text-primary uk-text-bolder">{move || project_dir.get()}</span>
                </p>
            </div>

            <LoadingButton
                id="createProject"
                label="Create Project"
                loading_label="Creating"
                icon="plus"
                button_type="submit"
                loading=submitting
                disabled=Signal::derive(move || check.get().disabled())
            />
        </form>
    }
}

/// Form pointing a project at an existing directory.
///
/// Used both for importing a project and for moving a registered project to a
/// new location (`index` tells the per-project forms apart).
#[component]
pub fn ProjectPathForm(
    #[prop(into)] action: String,
    #[prop(into)] button_label: String,
    #[prop(into)] loading_label: String,
    #[prop(into)] id_prefix: String,
    #[prop(optional)] index: Option<usize>,
    #[prop(optional, into)] initial_path: String,
    #[prop(optional, into)] project_name: Option<String>,
) -> impl IntoView {
    let suffix = index.map(|i| i.to_string()).unwrap_or_default();
    let input_id = format!("{}Path{}", id_prefix, suffix);
    let label_id = format!("{}Label{}", id_prefix, suffix);
    let button_id = format!("{}{}", id_prefix, suffix);

    let path = RwSignal::new(initial_path);
    // Until the user edits, the stored location needs no check
    let check = RwSignal::new(if path.get_untracked().is_empty() {
        FieldCheck::neutral()
    } else {
        FieldCheck::ok()
    });
    let submitting = RwSignal::new(false);
    let sequence = RequestSequence::new();

    let revalidate = move |_: String| {
        let ticket = sequence.issue();
        let path_value = path.get_untracked();
        spawn_local(async move {
            if !ticket.settle(config::get().debounce_ms).await {
                return;
            }
            match commands::browse_directory(&path_value, "").await {
                Ok(browse) if ticket.is_current() => check.set(check_project_path(&path_value, &browse)),
                Ok(_) => {}
                Err(err) => log::warn!("[project-path] {}", err),
            }
        });
    };

    view! {
        <form class="uk-form-stacked" method="post" action=action on:submit=move |_| submitting.set(true)>
            {project_name.map(|name| view! { <input type="hidden" name="projectName" value=name /> })}
            <div class="uk-margin">
                <PathAutocomplete
                    value=path
                    mode=SuggestionMode::Directories
                    name="path"
                    id=input_id
                    invalid=Signal::derive(move || check.get().warning.is_some())
                    on_change=revalidate
                />
                <FieldWarning id=label_id check=check />
            </div>
            <LoadingButton
                id=button_id
                label=button_label
                loading_label=loading_label
                icon="check"
                button_type="submit"
                loading=submitting
                disabled=Signal::derive(move || check.get().blocking)
            />
        </form>
    }
}
