//! Frontend Models
//!
//! Data structures matching backend request/response payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Result of `/browse-directory`. Callers only look at the fields they need,
/// so every field falls back to its default when the backend omits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryBrowseResult {
    pub subdirs: Vec<String>,
    pub video_files: Vec<String>,
    pub project_path_prefix: String,
    pub project_dir: String,
    pub project_name_unique: bool,
    pub project_dir_exists: bool,
    pub path_exists: bool,
    pub path_unique: bool,
}

/// Project configuration as returned by `/project-config`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: Option<String>,
    /// Class name -> class data (opaque here, only key presence matters)
    pub classes: BTreeMap<String, serde_json::Value>,
    /// Tag index -> tag name
    pub tags: BTreeMap<String, String>,
    pub use_gpu: bool,
    pub temporal: bool,
    pub assisted_tagging: bool,
}

impl ProjectConfig {
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }
}

/// Per-project boolean settings toggled through `/toggle-project-setting`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectSetting {
    UseGpu,
    Temporal,
    AssistedTagging,
}

impl ProjectSetting {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectSetting::UseGpu => "use_gpu",
            ProjectSetting::Temporal => "temporal",
            ProjectSetting::AssistedTagging => "assisted_tagging",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct ToggleSettingResult {
    #[serde(default)]
    pub setting_status: bool,
}

/// Shared shape of `/assign-tag-to-class` and `/remove-tag-from-class` replies
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct SuccessFlag {
    #[serde(default)]
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CounterpartCreationResult {
    pub url: String,
}

/// A tag as offered in a class dropdown or listed under a class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagOption {
    pub index: u32,
    pub name: String,
}

/// Video names whose tags get copied to the counterpart class
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideosToCopyTags {
    pub train: Vec<String>,
    pub valid: Vec<String>,
}
