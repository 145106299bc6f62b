//! Form Validation
//!
//! Pure checks behind every form of the console. Each check walks its
//! conditions in a fixed order and stops at the first one that fails; an empty
//! required field blocks submission without showing a warning.

use std::fmt;

use crate::models::{DirectoryBrowseResult, ProjectConfig};

/// Word no tag may be named after, compared case-insensitively
pub const RESERVED_TAG_NAME: &str = "background";

/// Inline warning shown under a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    ProjectNameTaken,
    ProjectDirExists,
    PathMissing,
    PathRegistered,
    ClassExists,
    ClassNameEmpty,
    TagExists,
    ReservedName,
}

impl Warning {
    pub fn message(self) -> &'static str {
        match self {
            Warning::ProjectNameTaken => "This project name is already used",
            Warning::ProjectDirExists => "A directory with this name already exists in the chosen location",
            Warning::PathMissing => "This path does not exist",
            Warning::PathRegistered => "Another project is already registered in this location",
            Warning::ClassExists => "A class with this name already exists",
            Warning::ClassNameEmpty => "Class name cannot be left empty",
            Warning::TagExists => "This tag name already exists",
            Warning::ReservedName => "This name is reserved",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome for one field: optional warning, and whether it blocks the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCheck {
    pub warning: Option<Warning>,
    pub blocking: bool,
}

impl FieldCheck {
    pub const fn ok() -> Self {
        Self { warning: None, blocking: false }
    }

    /// Nothing entered yet: quiet, but the form can't be sent
    pub const fn neutral() -> Self {
        Self { warning: None, blocking: true }
    }

    pub const fn fail(warning: Warning) -> Self {
        Self { warning: Some(warning), blocking: true }
    }

    /// Label text; empty when there is nothing to say
    pub fn message(&self) -> &'static str {
        self.warning.map(Warning::message).unwrap_or("")
    }
}

impl Default for FieldCheck {
    fn default() -> Self {
        Self::ok()
    }
}

/// New project form: name and path are judged independently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewProjectCheck {
    pub name: FieldCheck,
    pub path: FieldCheck,
}

impl NewProjectCheck {
    pub fn disabled(&self) -> bool {
        self.name.blocking || self.path.blocking
    }
}

impl Default for NewProjectCheck {
    fn default() -> Self {
        Self { name: FieldCheck::neutral(), path: FieldCheck::neutral() }
    }
}

pub fn check_new_project(name: &str, path: &str, browse: &DirectoryBrowseResult) -> NewProjectCheck {
    let name = if name.is_empty() {
        FieldCheck::neutral()
    } else if !browse.project_name_unique {
        FieldCheck::fail(Warning::ProjectNameTaken)
    } else if browse.project_dir_exists {
        FieldCheck::fail(Warning::ProjectDirExists)
    } else {
        FieldCheck::ok()
    };

    let path = if path.is_empty() {
        FieldCheck::neutral()
    } else if !browse.path_exists {
        FieldCheck::fail(Warning::PathMissing)
    } else {
        FieldCheck::ok()
    };

    NewProjectCheck { name, path }
}

/// Import and update share this rule
pub fn check_project_path(path: &str, browse: &DirectoryBrowseResult) -> FieldCheck {
    if path.is_empty() {
        FieldCheck::neutral()
    } else if !browse.path_unique {
        FieldCheck::fail(Warning::PathRegistered)
    } else if !browse.path_exists {
        FieldCheck::fail(Warning::PathMissing)
    } else {
        FieldCheck::ok()
    }
}

pub fn check_new_class(name: &str, config: &ProjectConfig) -> FieldCheck {
    if name.is_empty() {
        FieldCheck::neutral()
    } else if config.has_class(name) {
        FieldCheck::fail(Warning::ClassExists)
    } else {
        FieldCheck::ok()
    }
}

pub fn check_class_rename(name: &str, original: &str, config: &ProjectConfig) -> FieldCheck {
    if name.is_empty() {
        FieldCheck::fail(Warning::ClassNameEmpty)
    } else if name != original && config.has_class(name) {
        FieldCheck::fail(Warning::ClassExists)
    } else {
        FieldCheck::ok()
    }
}

/// Tag creation passes an empty `original`
pub fn check_tag_name<'a, I>(value: &str, original: &str, existing: I) -> FieldCheck
where
    I: IntoIterator<Item = &'a str>,
{
    if value.is_empty() {
        FieldCheck::neutral()
    } else if value != original && existing.into_iter().any(|name| name == value) {
        FieldCheck::fail(Warning::TagExists)
    } else if value.to_lowercase() == RESERVED_TAG_NAME {
        FieldCheck::fail(Warning::ReservedName)
    } else {
        FieldCheck::ok()
    }
}

/// Counterpart names are only required to be non-empty
pub fn check_counterpart_name(name: &str) -> FieldCheck {
    if name.is_empty() {
        FieldCheck::fail(Warning::ClassNameEmpty)
    } else {
        FieldCheck::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn browse(unique_name: bool, dir_exists: bool, path_exists: bool, path_unique: bool) -> DirectoryBrowseResult {
        DirectoryBrowseResult {
            project_name_unique: unique_name,
            project_dir_exists: dir_exists,
            path_exists,
            path_unique,
            ..Default::default()
        }
    }

    fn config_with(classes: &[&str]) -> ProjectConfig {
        let mut config = ProjectConfig::default();
        for name in classes {
            config.classes.insert(name.to_string(), json!([]));
        }
        config
    }

    #[test]
    fn test_empty_inputs_are_neutral_but_blocking() {
        let everything_wrong = browse(false, true, false, false);

        let project = check_new_project("", "", &everything_wrong);
        assert_eq!(project.name, FieldCheck::neutral());
        assert_eq!(project.path, FieldCheck::neutral());
        assert!(project.disabled());

        assert_eq!(check_project_path("", &everything_wrong), FieldCheck::neutral());
        assert_eq!(check_new_class("", &config_with(&["cat"])), FieldCheck::neutral());
        assert_eq!(check_tag_name("", "", ["background"]), FieldCheck::neutral());
        assert_eq!(FieldCheck::neutral().message(), "");
    }

    #[test]
    fn test_new_project_name_priority() {
        // Name taken wins over existing directory
        let check = check_new_project("pets", "/data", &browse(false, true, true, true));
        assert_eq!(check.name.warning, Some(Warning::ProjectNameTaken));

        let check = check_new_project("pets", "/data", &browse(true, true, true, true));
        assert_eq!(check.name.warning, Some(Warning::ProjectDirExists));
        assert_eq!(check.name.message(), "A directory with this name already exists in the chosen location");

        let check = check_new_project("pets", "/data", &browse(true, false, true, true));
        assert_eq!(check.name, FieldCheck::ok());
        assert_eq!(check.path, FieldCheck::ok());
        assert!(!check.disabled());
    }

    #[test]
    fn test_new_project_fields_are_independent() {
        let check = check_new_project("pets", "/nowhere", &browse(false, false, false, true));
        assert_eq!(check.name.warning, Some(Warning::ProjectNameTaken));
        assert_eq!(check.path.warning, Some(Warning::PathMissing));

        // A valid name still leaves the form disabled while the path is empty
        let check = check_new_project("pets", "", &browse(true, false, false, true));
        assert_eq!(check.name, FieldCheck::ok());
        assert!(check.disabled());
    }

    #[test]
    fn test_project_path_priority() {
        // Registered elsewhere is reported before non-existence
        let check = check_project_path("/data/pets", &browse(true, false, false, false));
        assert_eq!(check.message(), "Another project is already registered in this location");

        let check = check_project_path("/data/pets", &browse(true, false, false, true));
        assert_eq!(check.message(), "This path does not exist");

        assert_eq!(check_project_path("/data/pets", &browse(true, false, true, true)), FieldCheck::ok());
    }

    #[test]
    fn test_new_class_collision() {
        let config = config_with(&["cat"]);
        let check = check_new_class("cat", &config);
        assert!(check.blocking);
        assert_eq!(check.message(), "A class with this name already exists");
        assert_eq!(check_new_class("dog", &config), FieldCheck::ok());
    }

    #[test]
    fn test_class_rename() {
        let config = config_with(&["cat", "dog"]);
        assert_eq!(check_class_rename("", "cat", &config), FieldCheck::fail(Warning::ClassNameEmpty));
        // Keeping the current name is fine
        assert_eq!(check_class_rename("cat", "cat", &config), FieldCheck::ok());
        assert_eq!(check_class_rename("dog", "cat", &config), FieldCheck::fail(Warning::ClassExists));
        assert_eq!(check_class_rename("bird", "cat", &config), FieldCheck::ok());
    }

    #[test]
    fn test_reserved_tag_name_any_case() {
        for name in ["Background", "BACKGROUND", "background"] {
            let check = check_tag_name(name, "", ["sitting"]);
            assert_eq!(check.warning, Some(Warning::ReservedName), "{}", name);
            assert!(check.blocking);
        }
        assert_eq!(check_tag_name("backgrounds", "", ["sitting"]), FieldCheck::ok());
    }

    #[test]
    fn test_tag_duplicate_before_reserved() {
        // An existing tag literally named "background" reports the duplicate first
        let check = check_tag_name("background", "", ["background"]);
        assert_eq!(check.warning, Some(Warning::TagExists));

        // Unchanged name during rename is not a duplicate
        assert_eq!(check_tag_name("sitting", "sitting", ["sitting", "standing"]), FieldCheck::ok());
        assert_eq!(
            check_tag_name("standing", "sitting", ["sitting", "standing"]),
            FieldCheck::fail(Warning::TagExists)
        );
    }

    #[test]
    fn test_counterpart_name_has_no_uniqueness_rule() {
        assert_eq!(check_counterpart_name(""), FieldCheck::fail(Warning::ClassNameEmpty));
        assert_eq!(check_counterpart_name("cat"), FieldCheck::ok());
    }
}
