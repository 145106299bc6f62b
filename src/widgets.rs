//! Widget Mounting
//!
//! Server pages mark where client widgets go:
//!
//! ```html
//! <div data-widget="class-tags" data-props='{"class_index": 0, ...}'></div>
//! ```
//!
//! On load every marked element is decoded into a [`Widget`] and the matching
//! component is mounted into it.

use std::collections::BTreeMap;

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use wasm_bindgen::JsCast;

use crate::components::{
    AddClassForm, ClassNameEditor, ClassTagAssignment, CounterpartPanel, FpsSelect, FrameTagButtons,
    LoadingButton, LoadingLink, NewProjectForm, NewTagForm, PathAutocomplete, ProjectPathForm, ProjectSettings,
    SuggestionMode, TagRow,
};
use crate::error::WidgetError;
use crate::models::TagOption;

const WIDGET_ATTR: &str = "data-widget";
const PROPS_ATTR: &str = "data-props";

fn default_create_action() -> String {
    "/create-project".to_string()
}

fn default_import_action() -> String {
    "/import-project".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewProjectProps {
    #[serde(default = "default_create_action")]
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImportProjectProps {
    #[serde(default = "default_import_action")]
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateProjectProps {
    pub index: usize,
    pub project_name: String,
    pub path: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddClassProps {
    pub project_name: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassNameProps {
    pub project_name: String,
    pub index: usize,
    pub class_name: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewTagProps {
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TagProps {
    pub index: u32,
    pub name: String,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassTagsProps {
    pub class_index: usize,
    pub class_name: String,
    pub path: String,
    #[serde(default)]
    pub available: Vec<TagOption>,
    #[serde(default)]
    pub assigned: Vec<TagOption>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectSettingsProps {
    pub path: String,
    #[serde(default)]
    pub use_gpu: bool,
    #[serde(default)]
    pub temporal: bool,
    #[serde(default)]
    pub assisted_tagging: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CounterpartProps {
    pub index: usize,
    pub project_name: String,
    pub original_class_name: String,
    pub url: String,
    #[serde(default)]
    pub counterpart_classes: Vec<String>,
    #[serde(default)]
    pub train_videos: Vec<String>,
    #[serde(default)]
    pub valid_videos: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FrameTagsProps {
    pub annotations: Vec<u32>,
    pub class_tags: Vec<TagOption>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FpsSelectProps {
    pub name: String,
    pub options: Vec<u32>,
    pub current: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PathSearchProps {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub placeholder: Option<String>,
}

fn default_button_icon() -> String {
    "play".to_string()
}

/// Button that shows a spinner, then opens `href`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoadingButtonProps {
    pub label: String,
    pub loading_label: String,
    #[serde(default = "default_button_icon")]
    pub icon: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoadingLinkProps {
    pub href: String,
    pub label: String,
}

/// Every widget a page can ask for
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    NewProject(NewProjectProps),
    ImportProject(ImportProjectProps),
    UpdateProject(UpdateProjectProps),
    AddClass(AddClassProps),
    ClassName(ClassNameProps),
    NewTag(NewTagProps),
    Tag(TagProps),
    ClassTags(ClassTagsProps),
    ProjectSettings(ProjectSettingsProps),
    Counterpart(CounterpartProps),
    FrameTags(FrameTagsProps),
    FpsSelect(FpsSelectProps),
    PathSearch(PathSearchProps),
    FilePathSearch(PathSearchProps),
    LoadingButton(LoadingButtonProps),
    LoadingLink(LoadingLinkProps),
}

fn props<T: DeserializeOwned>(kind: &str, value: serde_json::Value) -> Result<T, WidgetError> {
    serde_json::from_value(value).map_err(|source| WidgetError::Props {
        kind: kind.to_string(),
        source,
    })
}

impl Widget {
    /// Decode a placeholder's `data-widget` / `data-props` pair; missing props mean `{}`
    pub fn decode(kind: &str, raw_props: Option<&str>) -> Result<Self, WidgetError> {
        let value = match raw_props.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => serde_json::from_str(raw).map_err(|source| WidgetError::Props {
                kind: kind.to_string(),
                source,
            })?,
            None => serde_json::Value::Object(Default::default()),
        };

        let widget = match kind {
            "new-project" => Widget::NewProject(props(kind, value)?),
            "import-project" => Widget::ImportProject(props(kind, value)?),
            "update-project" => Widget::UpdateProject(props(kind, value)?),
            "add-class" => Widget::AddClass(props(kind, value)?),
            "class-name" => Widget::ClassName(props(kind, value)?),
            "new-tag" => Widget::NewTag(props(kind, value)?),
            "tag" => Widget::Tag(props(kind, value)?),
            "class-tags" => Widget::ClassTags(props(kind, value)?),
            "project-settings" => Widget::ProjectSettings(props(kind, value)?),
            "counterpart" => Widget::Counterpart(props(kind, value)?),
            "frame-tags" => Widget::FrameTags(props(kind, value)?),
            "fps-select" => Widget::FpsSelect(props(kind, value)?),
            "path-search" => Widget::PathSearch(props(kind, value)?),
            "file-path-search" => Widget::FilePathSearch(props(kind, value)?),
            "loading-button" => Widget::LoadingButton(props(kind, value)?),
            "loading-link" => Widget::LoadingLink(props(kind, value)?),
            other => return Err(WidgetError::UnknownKind(other.to_string())),
        };
        Ok(widget)
    }

    pub fn render(self) -> AnyView {
        match self {
            Widget::NewProject(p) => view! { <NewProjectForm action=p.action /> }.into_any(),
            Widget::ImportProject(p) => view! {
                <ProjectPathForm
                    action=p.action
                    button_label="Import Project"
                    loading_label="Importing"
                    id_prefix="importProject"
                />
            }.into_any(),
            Widget::UpdateProject(p) => view! {
                <ProjectPathForm
                    action=p.action
                    button_label="Update"
                    loading_label="Updating"
                    id_prefix="updateProject"
                    index=p.index
                    initial_path=p.path
                    project_name=p.project_name
                />
            }.into_any(),
            Widget::AddClass(p) => view! {
                <AddClassForm project_name=p.project_name action=p.action />
            }.into_any(),
            Widget::ClassName(p) => view! {
                <ClassNameEditor
                    project_name=p.project_name
                    index=p.index
                    class_name=p.class_name
                    action=p.action
                />
            }.into_any(),
            Widget::NewTag(p) => view! { <NewTagForm tags=p.tags action=p.action /> }.into_any(),
            Widget::Tag(p) => view! {
                <TagRow index=p.index name=p.name tags=p.tags action=p.action />
            }.into_any(),
            Widget::ClassTags(p) => view! {
                <ClassTagAssignment
                    class_index=p.class_index
                    class_name=p.class_name
                    path=p.path
                    available=p.available
                    assigned=p.assigned
                />
            }.into_any(),
            Widget::ProjectSettings(p) => view! {
                <ProjectSettings
                    path=p.path
                    use_gpu=p.use_gpu
                    temporal=p.temporal
                    assisted_tagging=p.assisted_tagging
                />
            }.into_any(),
            Widget::Counterpart(p) => view! {
                <CounterpartPanel
                    index=p.index
                    project_name=p.project_name
                    original_class_name=p.original_class_name
                    url=p.url
                    counterpart_classes=p.counterpart_classes
                    train_videos=p.train_videos
                    valid_videos=p.valid_videos
                />
            }.into_any(),
            Widget::FrameTags(p) => view! {
                <FrameTagButtons annotations=p.annotations class_tags=p.class_tags />
            }.into_any(),
            Widget::FpsSelect(p) => view! {
                <FpsSelect name=p.name options=p.options current=p.current />
            }.into_any(),
            Widget::PathSearch(p) => path_search(p, SuggestionMode::Directories),
            Widget::FilePathSearch(p) => path_search(p, SuggestionMode::DirectoriesAndFiles),
            Widget::LoadingButton(p) => view! {
                <LoadingButton
                    label=p.label
                    loading_label=p.loading_label
                    icon=p.icon
                    loading=RwSignal::new(false)
                    href=p.href
                />
            }.into_any(),
            Widget::LoadingLink(p) => view! { <LoadingLink href=p.href label=p.label /> }.into_any(),
        }
    }
}

/// Standalone search input outside any validated form
fn path_search(p: PathSearchProps, mode: SuggestionMode) -> AnyView {
    let value = RwSignal::new(p.value);
    match (p.id, p.placeholder) {
        (Some(id), Some(placeholder)) => view! {
            <PathAutocomplete value=value mode=mode name=p.name id=id placeholder=placeholder />
        }.into_any(),
        (Some(id), None) => view! {
            <PathAutocomplete value=value mode=mode name=p.name id=id />
        }.into_any(),
        (None, Some(placeholder)) => view! {
            <PathAutocomplete value=value mode=mode name=p.name placeholder=placeholder />
        }.into_any(),
        (None, None) => view! { <PathAutocomplete value=value mode=mode name=p.name /> }.into_any(),
    }
}

/// Mount a widget into every `[data-widget]` element of the page; returns how many mounted
pub fn mount_all() -> usize {
    let nodes = match document().query_selector_all(&format!("[{}]", WIDGET_ATTR)) {
        Ok(nodes) => nodes,
        Err(err) => {
            log::error!("[widgets] query failed: {:?}", err);
            return 0;
        }
    };

    let mut mounted = 0;
    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok()) else {
            continue;
        };
        let kind = element.get_attribute(WIDGET_ATTR).unwrap_or_default();
        let raw_props = element.get_attribute(PROPS_ATTR);

        match Widget::decode(&kind, raw_props.as_deref()) {
            Ok(widget) => {
                leptos::mount::mount_to(element, move || widget.render()).forget();
                mounted += 1;
            }
            Err(err) => log::error!("[widgets] {}", err),
        }
    }
    mounted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_class_tags() {
        let widget = Widget::decode(
            "class-tags",
            Some(r#"{"class_index": 2, "class_name": "cat", "path": "/data/pets",
                     "available": [{"index": 1, "name": "sitting"}],
                     "assigned": [{"index": 3, "name": "jumping"}]}"#),
        )
        .unwrap();
        match widget {
            Widget::ClassTags(p) => {
                assert_eq!(p.class_index, 2);
                assert_eq!(p.available, vec![TagOption { index: 1, name: "sitting".into() }]);
                assert_eq!(p.assigned[0].name, "jumping");
            }
            other => panic!("decoded {:?}", other),
        }
    }

    #[test]
    fn test_missing_props_use_defaults() {
        assert_eq!(
            Widget::decode("new-project", None).unwrap(),
            Widget::NewProject(NewProjectProps { action: "/create-project".into() })
        );
        assert_eq!(
            Widget::decode("import-project", Some("  ")).unwrap(),
            Widget::ImportProject(ImportProjectProps { action: "/import-project".into() })
        );
    }

    #[test]
    fn test_settings_flags_default_off() {
        let widget = Widget::decode("project-settings", Some(r#"{"path": "/data/pets", "temporal": true}"#)).unwrap();
        assert_eq!(
            widget,
            Widget::ProjectSettings(ProjectSettingsProps {
                path: "/data/pets".into(),
                use_gpu: false,
                temporal: true,
                assisted_tagging: false,
            })
        );
    }

    #[test]
    fn test_path_search_kinds() {
        let dirs = Widget::decode("path-search", Some(r#"{"name": "path"}"#)).unwrap();
        let files = Widget::decode("file-path-search", Some(r#"{"name": "video"}"#)).unwrap();
        assert!(matches!(dirs, Widget::PathSearch(ref p) if p.name == "path"));
        assert!(matches!(files, Widget::FilePathSearch(ref p) if p.name == "video" && p.value.is_empty()));
    }

    #[test]
    fn test_loading_button_carries_target() {
        let widget = Widget::decode(
            "loading-button",
            Some(r#"{"label": "Annotate", "loading_label": "Loading", "href": "/annotate/pets/cat"}"#),
        )
        .unwrap();
        assert_eq!(
            widget,
            Widget::LoadingButton(LoadingButtonProps {
                label: "Annotate".into(),
                loading_label: "Loading".into(),
                icon: "play".into(),
                href: "/annotate/pets/cat".into(),
            })
        );
        assert!(Widget::decode("loading-button", Some(r#"{"label": "Annotate"}"#)).is_err());
    }

    #[test]
    fn test_unknown_kind() {
        match Widget::decode("gallery", None) {
            Err(WidgetError::UnknownKind(kind)) => assert_eq!(kind, "gallery"),
            other => panic!("expected unknown kind, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_props_name_the_widget() {
        let err = Widget::decode("counterpart", Some(r#"{"index": "first"}"#)).unwrap_err();
        assert!(err.to_string().starts_with("invalid props for `counterpart`"));

        let err = Widget::decode("tag", Some("{not json")).unwrap_err();
        assert!(matches!(err, WidgetError::Props { .. }));
    }
}
