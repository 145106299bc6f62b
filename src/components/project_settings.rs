//! Project Settings Panel
//!
//! Checkboxes for GPU usage, temporal annotation and assisted tagging.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::dom::{self, HIDDEN_CLASS, TEMPORAL_CLASS};
use crate::models::ProjectSetting;
use crate::store::{
    store_apply_setting, store_set_pending, store_setting, use_settings_store, SettingsState,
    SettingsStateStoreFields, SettingsStore,
};

/// Whether `.temporal` elements are hidden for a temporal setting status
pub fn temporal_markers_hidden(temporal: bool) -> bool {
    !temporal
}

/// Send the toggle and mirror the reported status (and its page-wide effects)
fn toggle(store: SettingsStore, setting: ProjectSetting) {
    let path = store.path().get_untracked();
    spawn_local(async move {
        match commands::toggle_project_setting(&path, setting).await {
            Ok(status) => {
                store_apply_setting(&store, setting, status);
                if setting == ProjectSetting::Temporal {
                    dom::set_hidden_by_class(TEMPORAL_CLASS, temporal_markers_hidden(status));
                }
            }
            Err(err) => {
                log::error!("[settings] toggling {} failed: {}", setting.as_str(), err);
                // Undo the browser's own flip of the checkbox
                let current = store_setting(&store, setting).get_untracked();
                store_apply_setting(&store, setting, current);
            }
        }
    });
}

/// Predictions depend on this setting, so the page is rebuilt afterwards
fn toggle_assisted_tagging(store: SettingsStore) {
    let path = store.path().get_untracked();
    store_set_pending(&store, true);
    spawn_local(async move {
        if let Err(err) = commands::toggle_project_setting(&path, ProjectSetting::AssistedTagging).await {
            log::error!("[settings] toggling assisted tagging failed: {}", err);
        }
        // Reload on failure too
        dom::reload();
    });
}

/// A checkbox bound to one setting
#[component]
fn SettingCheckbox(
    setting: ProjectSetting,
    #[prop(into)] id: String,
    #[prop(into)] label: String,
) -> impl IntoView {
    let store = use_settings_store();
    let checked = store_setting(&store, setting);

    view! {
        <label>
            <input
                type="checkbox"
                id=id
                class="uk-checkbox"
                prop:checked=move || checked.get()
                on:change=move |_| toggle(store, setting)
            />
            " "
            {label}
        </label>
    }
}

#[component]
pub fn ProjectSettings(
    /// Project path, identifies the project to the backend
    #[prop(into)] path: String,
    use_gpu: bool,
    temporal: bool,
    assisted_tagging: bool,
) -> impl IntoView {
    let store = Store::new(SettingsState {
        path,
        use_gpu,
        temporal,
        assisted_tagging,
        assisted_pending: false,
    });
    provide_context(store);

    // Bring marker elements in line with the stored mode on load
    dom::set_hidden_by_class(TEMPORAL_CLASS, temporal_markers_hidden(temporal));

    let assisted_checked = store_setting(&store, ProjectSetting::AssistedTagging);
    let pending = move || store.assisted_pending().get();

    view! {
        <div class="project-settings uk-grid-small uk-child-width-auto" uk-grid="">
            <div>
                <SettingCheckbox setting=ProjectSetting::UseGpu id="gpuInput" label="Use GPU" />
            </div>
            <div>
                <SettingCheckbox setting=ProjectSetting::Temporal id="makeProjectTemporal" label="Temporal annotations" />
            </div>
            <div>
                <label>
                    <input
                        type="checkbox"
                        id="assistedTaggingCheckbox"
                        class="uk-checkbox"
                        class=(HIDDEN_CLASS, pending)
                        prop:checked=move || assisted_checked.get()
                        on:change=move |_| toggle_assisted_tagging(store)
                    />
                    <span id="assistedTaggingSpinner" uk-spinner="ratio: 0.6" class=(HIDDEN_CLASS, move || !pending())></span>
                    " Assisted tagging"
                </label>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temporal_markers_follow_status() {
        assert!(!temporal_markers_hidden(true));
        assert!(temporal_markers_hidden(false));
        // Same status twice gives the same visibility
        assert_eq!(temporal_markers_hidden(true), temporal_markers_hidden(true));
    }
}
