//! UI Components
//!
//! Leptos widgets mounted into the server-rendered console pages.

mod form_warning;
mod editable;
mod loading_button;
mod path_autocomplete;
mod project_forms;
mod class_forms;
mod tag_editor;
mod class_tags;
mod project_settings;
mod counterpart;
mod frame_tags;
mod fps_select;

pub use form_warning::FieldWarning;
pub use editable::EditToggle;
pub use loading_button::{LoadingButton, LoadingLink};
pub use path_autocomplete::{PathAutocomplete, SuggestionMode};
pub use project_forms::{NewProjectForm, ProjectPathForm};
pub use class_forms::{AddClassForm, ClassNameEditor};
pub use tag_editor::{NewTagForm, TagRow};
pub use class_tags::ClassTagAssignment;
pub use project_settings::ProjectSettings;
pub use counterpart::CounterpartPanel;
pub use frame_tags::FrameTagButtons;
pub use fps_select::FpsSelect;
