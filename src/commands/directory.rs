//! Directory & Config Commands
//!
//! Filesystem browsing and project configuration lookups.

use serde::Serialize;

use super::post;
use crate::error::ApiError;
use crate::models::{DirectoryBrowseResult, ProjectConfig};

pub const BROWSE_DIRECTORY: &str = "/browse-directory";
pub const PROJECT_CONFIG: &str = "/project-config";

#[derive(Serialize)]
struct BrowseDirectoryArgs<'a> {
    path: &'a str,
    project: &'a str,
}

#[derive(Serialize)]
struct ProjectConfigArgs<'a> {
    name: &'a str,
}

/// Browse `path`; `project` is the name of a project about to be created there (may be empty)
pub async fn browse_directory(path: &str, project: &str) -> Result<DirectoryBrowseResult, ApiError> {
    post(BROWSE_DIRECTORY, &BrowseDirectoryArgs { path, project }).await
}

pub async fn get_project_config(project_name: &str) -> Result<ProjectConfig, ApiError> {
    post(PROJECT_CONFIG, &ProjectConfigArgs { name: project_name }).await
}
