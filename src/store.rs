//! Project Settings Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the setting toggles.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::ProjectSetting;

/// Current state of the per-project toggles
#[derive(Clone, Debug, Default, Store)]
pub struct SettingsState {
    /// Project path the toggles apply to
    pub path: String,
    pub use_gpu: bool,
    pub temporal: bool,
    pub assisted_tagging: bool,
    /// Assisted tagging request in flight (spinner replaces the checkbox)
    pub assisted_pending: bool,
}

/// Type alias for the store
pub type SettingsStore = Store<SettingsState>;

/// Get the settings store from context
pub fn use_settings_store() -> SettingsStore {
    expect_context::<SettingsStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Record the status the backend reported for `setting`
pub fn store_apply_setting(store: &SettingsStore, setting: ProjectSetting, status: bool) {
    match setting {
        ProjectSetting::UseGpu => *store.use_gpu().write() = status,
        ProjectSetting::Temporal => *store.temporal().write() = status,
        ProjectSetting::AssistedTagging => *store.assisted_tagging().write() = status,
    }
}

pub fn store_setting(store: &SettingsStore, setting: ProjectSetting) -> Signal<bool> {
    let store = *store;
    Signal::derive(move || match setting {
        ProjectSetting::UseGpu => store.use_gpu().get(),
        ProjectSetting::Temporal => store.temporal().get(),
        ProjectSetting::AssistedTagging => store.assisted_tagging().get(),
    })
}

pub fn store_set_pending(store: &SettingsStore, pending: bool) {
    *store.assisted_pending().write() = pending;
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ProjectSetting; 3] = [
        ProjectSetting::UseGpu,
        ProjectSetting::Temporal,
        ProjectSetting::AssistedTagging,
    ];

    #[test]
    fn test_reported_status_checks_box() {
        let store = Store::new(SettingsState::default());
        let gpu = store_setting(&store, ProjectSetting::UseGpu);
        assert!(!gpu.get_untracked());

        store_apply_setting(&store, ProjectSetting::UseGpu, true);
        assert!(gpu.get_untracked());
        assert!(!store_setting(&store, ProjectSetting::Temporal).get_untracked());
    }

    #[test]
    fn test_each_setting_follows_its_status() {
        let store = Store::new(SettingsState::default());
        for setting in ALL {
            store_apply_setting(&store, setting, true);
            assert!(store_setting(&store, setting).get_untracked(), "{} on", setting.as_str());
            store_apply_setting(&store, setting, false);
            assert!(!store_setting(&store, setting).get_untracked(), "{} off", setting.as_str());
        }
    }

    #[test]
    fn test_reapplying_status_is_idempotent() {
        let store = Store::new(SettingsState::default());
        store_apply_setting(&store, ProjectSetting::Temporal, true);
        store_apply_setting(&store, ProjectSetting::Temporal, true);
        assert!(store_setting(&store, ProjectSetting::Temporal).get_untracked());

        store_apply_setting(&store, ProjectSetting::Temporal, false);
        store_apply_setting(&store, ProjectSetting::Temporal, false);
        assert!(!store_setting(&store, ProjectSetting::Temporal).get_untracked());
    }

    #[test]
    fn test_pending_flag() {
        let store = Store::new(SettingsState::default());
        store_set_pending(&store, true);
        assert!(store.assisted_pending().get_untracked());
        store_set_pending(&store, false);
        assert!(!store.assisted_pending().get_untracked());
    }
}
