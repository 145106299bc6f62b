//! Project Setting Commands

use serde::Serialize;

use super::post;
use crate::error::ApiError;
use crate::models::{ProjectSetting, ToggleSettingResult};

pub const TOGGLE_PROJECT_SETTING: &str = "/toggle-project-setting";

#[derive(Serialize)]
struct ToggleSettingArgs<'a> {
    path: &'a str,
    setting: ProjectSetting,
}

/// Flip a boolean setting of the project at `path` and return its new state
pub async fn toggle_project_setting(path: &str, setting: ProjectSetting) -> Result<bool, ApiError> {
    let result: ToggleSettingResult = post(TOGGLE_PROJECT_SETTING, &ToggleSettingArgs { path, setting }).await?;
    log::info!("[settings] {} is now {}", setting.as_str(), result.setting_status);
    Ok(result.setting_status)
}
