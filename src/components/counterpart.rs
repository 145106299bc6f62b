//! Counterpart Class Panel
//!
//! Pick (or name) the class of a paired project that mirrors an original class,
//! optionally copy the tags of selected videos over, then follow the redirect.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, CreateCounterpartArgs};
use crate::components::editable::EditToggle;
use crate::components::form_warning::{FieldWarning, DANGER_CLASS};
use crate::components::loading_button::LoadingButton;
use crate::dom::{self, HIDDEN_CLASS};
use crate::models::VideosToCopyTags;
use crate::validation::{check_counterpart_name, FieldCheck};

/// Dropdown value standing for "create a new class"
pub const NEW_CLASS_VALUE: &str = "-1";

/// Video checkbox: name and whether it is ticked
pub type VideoChoice = (String, bool);

/// Class name to send: the typed name for a new class, otherwise the dropdown value
pub fn counterpart_class_name(selected: &str, new_class_name: &str) -> String {
    if selected == NEW_CLASS_VALUE {
        new_class_name.to_string()
    } else {
        selected.to_string()
    }
}

fn checked_names(videos: &[VideoChoice]) -> Vec<String> {
    videos
        .iter()
        .filter(|(_, checked)| *checked)
        .map(|(name, _)| name.clone())
        .collect()
}

/// Assemble the request; checked videos only count when tags are copied
pub fn build_counterpart_args(
    project_name: &str,
    original_class_name: &str,
    counterpart_class_name: String,
    copy_tags: bool,
    train: &[VideoChoice],
    valid: &[VideoChoice],
) -> CreateCounterpartArgs {
    let videos_to_copy_tags = if copy_tags {
        VideosToCopyTags {
            train: checked_names(train),
            valid: checked_names(valid),
        }
    } else {
        VideosToCopyTags::default()
    };

    CreateCounterpartArgs {
        project_name: project_name.to_string(),
        original_class_name: original_class_name.to_string(),
        counterpart_class_name,
        videos_to_copy_tags,
    }
}

/// Checkbox list of one split (train or valid)
#[component]
fn VideoList(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    videos: RwSignal<Vec<VideoChoice>>,
) -> impl IntoView {
    view! {
        <div>
            <h5>{title}</h5>
            <ul id=id class="uk-list">
                {videos.get_untracked().into_iter().enumerate().map(|(i, (name, checked))| {
                    view! {
                        <li>
                            <input
                                type="checkbox"
                                class="uk-checkbox"
                                value=name.clone()
                                prop:checked=checked
                                on:change=move |ev| {
                                    let ticked = event_target_checked(&ev);
                                    videos.update(|list| {
                                        if let Some(entry) = list.get_mut(i) {
                                            entry.1 = ticked;
                                        }
                                    });
                                }
                            />
                            " "
                            {name}
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn CounterpartPanel(
    index: usize,
    #[prop(into)] project_name: String,
    #[prop(into)] original_class_name: String,
    /// Endpoint creating the counterpart; replies with the page to open next
    #[prop(into)] url: String,
    /// Classes already present in the paired project
    counterpart_classes: Vec<String>,
    train_videos: Vec<String>,
    valid_videos: Vec<String>,
) -> impl IntoView {
    let selected = RwSignal::new(NEW_CLASS_VALUE.to_string());
    let toggle = RwSignal::new(EditToggle::default());
    toggle.update(EditToggle::enter);
    let check = RwSignal::new(FieldCheck::neutral());
    let copy_tags = RwSignal::new(false);
    let train = RwSignal::new(train_videos.into_iter().map(|v| (v, false)).collect::<Vec<_>>());
    let valid = RwSignal::new(valid_videos.into_iter().map(|v| (v, false)).collect::<Vec<_>>());
    let saving = RwSignal::new(false);
    let project_name = StoredValue::new(project_name);
    let original_class_name = StoredValue::new(original_class_name);
    let url = StoredValue::new(url);

    let is_new_class = move || selected.get() == NEW_CLASS_VALUE;

    let on_select = move |value: String| {
        if value == NEW_CLASS_VALUE {
            toggle.update(EditToggle::enter);
        }
        selected.set(value);
    };

    let save = move || {
        let class_name = counterpart_class_name(
            &selected.get_untracked(),
            toggle.with_untracked(|t| t.display().to_string()).as_str(),
        );
        let args = build_counterpart_args(
            &project_name.get_value(),
            &original_class_name.get_value(),
            class_name,
            copy_tags.get_untracked(),
            &train.get_untracked(),
            &valid.get_untracked(),
        );
        let url = url.get_value();
        spawn_local(async move {
            match commands::create_counterpart_videos(&url, &args).await {
                Ok(next) => dom::navigate(&next),
                Err(err) => {
                    log::error!("[counterpart] {}", err);
                    saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="counterpart-panel">
            <select
                id=format!("selectCounterpartClass{}", index)
                class="uk-select uk-form-small"
                prop:value=move || selected.get()
                on:change=move |ev| on_select(event_target_value(&ev))
            >
                <option value=NEW_CLASS_VALUE>"New class..."</option>
                {counterpart_classes.into_iter().map(|name| {
                    view! { <option value=name.clone()>{name.clone()}</option> }
                }).collect_view()}
            </select>

            <div
                id=format!("counterpartClassShow{}", index)
                class=(HIDDEN_CLASS, move || !is_new_class() || toggle.get().editing)
            >
                <span id=format!("counterpartClassName{}", index) class="uk-text-bold">
                    {move || toggle.with(|t| t.display().to_string())}
                </span>
                " "
                <a uk-icon="icon: pencil" on:click=move |_| toggle.update(EditToggle::enter)></a>
            </div>

            <div
                id=format!("counterpartClassEdit{}", index)
                class=(HIDDEN_CLASS, move || !is_new_class() || !toggle.get().editing)
            >
                <input
                    type="text"
                    id=format!("editCounterpartClassName{}", index)
                    class="uk-input uk-form-small"
                    class=(DANGER_CLASS, move || check.get().warning.is_some())
                    autocomplete="off"
                    prop:value=move || toggle.get().value
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        check.set(check_counterpart_name(&text));
                        toggle.update(|t| t.set_value(text));
                    }
                />
                <button
                    type="button"
                    id=format!("submitCounterpartClass{}", index)
                    class="uk-button uk-button-primary uk-button-small"
                    disabled=move || check.get().blocking
                    on:click=move |_| toggle.update(EditToggle::confirm)
                >
                    "OK"
                </button>
                <button
                    type="button"
                    class="uk-button uk-button-default uk-button-small"
                    on:click=move |_| {
                        toggle.update(EditToggle::cancel);
                        check.update(|c| c.warning = None);
                    }
                >
                    "Cancel"
                </button>
                <FieldWarning id=format!("counterpartClassNameLabel{}", index) check=check />
            </div>

            <div class="uk-margin-small">
                <label>
                    <input
                        type="radio"
                        class="uk-radio"
                        name=format!("copyTag{}", index)
                        value="1"
                        prop:checked=move || copy_tags.get()
                        on:change=move |_| copy_tags.set(true)
                    />
                    " Copy tags"
                </label>
                " "
                <label>
                    <input
                        type="radio"
                        class="uk-radio"
                        name=format!("copyTag{}", index)
                        value="0"
                        prop:checked=move || !copy_tags.get()
                        on:change=move |_| copy_tags.set(false)
                    />
                    " Don't copy tags"
                </label>
            </div>

            <div id=format!("copyVideoTags{}", index) class=(HIDDEN_CLASS, move || !copy_tags.get())>
                <VideoList id=format!("trainVideoList{}", index) title="Train" videos=train />
                <VideoList id=format!("validVideoList{}", index) title="Valid" videos=valid />
            </div>

            <LoadingButton
                id=format!("saveCounterparts{}", index)
                label="Save"
                loading_label="Preparing"
                icon="check"
                loading=saving
                on_click=move |_: ()| save()
            />
        </div>
    }
}
