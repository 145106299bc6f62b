//! Class Tag Assignment
//!
//! Dropdown of unassigned tags plus the list of tags a class already uses.
//! The UI only moves a tag once the backend confirms the change.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::TagOption;

/// Which tags sit in the dropdown and which are listed under the class
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagAssignments {
    pub available: Vec<TagOption>,
    pub assigned: Vec<TagOption>,
}

impl TagAssignments {
    pub fn new(available: Vec<TagOption>, assigned: Vec<TagOption>) -> Self {
        Self { available, assigned }
    }

    /// Move a tag from the dropdown to the end of the list
    pub fn assign(&mut self, index: u32) -> bool {
        match self.available.iter().position(|tag| tag.index == index) {
            Some(pos) => {
                let tag = self.available.remove(pos);
                self.assigned.push(tag);
                true
            }
            None => false,
        }
    }

    /// Move a tag from the list back to the end of the dropdown
    pub fn unassign(&mut self, index: u32) -> bool {
        match self.assigned.iter().position(|tag| tag.index == index) {
            Some(pos) => {
                let tag = self.assigned.remove(pos);
                self.available.push(tag);
                true
            }
            None => false,
        }
    }
}

#[component]
pub fn ClassTagAssignment(
    class_index: usize,
    #[prop(into)] class_name: String,
    /// Project path, identifies the project to the backend
    #[prop(into)] path: String,
    available: Vec<TagOption>,
    assigned: Vec<TagOption>,
) -> impl IntoView {
    let state = RwSignal::new(TagAssignments::new(available, assigned));
    let (feedback, set_feedback) = signal::<Option<String>>(None);
    let class_name = StoredValue::new(class_name);
    let path = StoredValue::new(path);

    let add_selected = move |raw: String| {
        let Ok(tag_index) = raw.parse::<u32>() else {
            return;
        };
        spawn_local(async move {
            let path = path.get_value();
            let class_name = class_name.get_value();
            match commands::assign_tag_to_class(&path, &class_name, tag_index).await {
                Ok(()) => {
                    state.update(|s| {
                        s.assign(tag_index);
                    });
                    set_feedback.set(None);
                }
                Err(err) => {
                    log::warn!("[class-tags] assign {} to {}: {}", tag_index, class_name, err);
                    set_feedback.set(Some(format!("Could not add the tag: {}", err)));
                }
            }
        });
    };

    let deselect = move |tag_index: u32| {
        spawn_local(async move {
            let path = path.get_value();
            let class_name = class_name.get_value();
            match commands::remove_tag_from_class(&path, &class_name, tag_index).await {
                Ok(()) => {
                    state.update(|s| {
                        s.unassign(tag_index);
                    });
                    set_feedback.set(None);
                }
                Err(err) => {
                    log::warn!("[class-tags] remove {} from {}: {}", tag_index, class_name, err);
                    set_feedback.set(Some(format!("Could not remove the tag: {}", err)));
                }
            }
        });
    };

    // Any change to the assignments snaps the dropdown back to its placeholder
    view! {
        <div class="class-tags">
            <select
                id=format!("selectTag{}", class_index)
                class="uk-select uk-form-small"
                prop:value=move || { state.track(); String::new() }
                on:change=move |ev| add_selected(event_target_value(&ev))
            >
                <option value="" disabled=true selected=true>"Select a tag"</option>
                <For
                    each=move || state.get().available
                    key=|tag| tag.index
                    children=move |tag| view! { <option value=tag.index.to_string()>{tag.name}</option> }
                />
            </select>

            {move || feedback.get().map(|text| view! { <p class="uk-text-danger uk-text-small">{text}</p> })}

            <ul id=format!("selectedTagsList{}", class_index) class="uk-list">
                <For
                    each=move || state.get().assigned
                    key=|tag| tag.index
                    children=move |tag| {
                        let tag_index = tag.index;
                        view! {
                            <li id=format!("tagList{}-{}", class_index, tag_index)>
                                <span uk-icon="icon: tag"></span>
                                " "
                                {tag.name}
                                <a class="uk-float-right">
                                    <span
                                        uk-icon="icon: close"
                                        class="uk-text-danger"
                                        on:click=move |_| deselect(tag_index)
                                    ></span>
                                </a>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(index: u32, name: &str) -> TagOption {
        TagOption { index, name: name.to_string() }
    }

    fn sorted(mut tags: Vec<TagOption>) -> Vec<TagOption> {
        tags.sort_by_key(|t| t.index);
        tags
    }

    #[test]
    fn test_assign_moves_tag_to_list() {
        let mut state = TagAssignments::new(vec![tag(1, "sitting"), tag(2, "standing")], vec![]);
        assert!(state.assign(1));
        assert_eq!(state.available, vec![tag(2, "standing")]);
        assert_eq!(state.assigned, vec![tag(1, "sitting")]);
    }

    #[test]
    fn test_assign_then_deselect_round_trip() {
        let before = TagAssignments::new(
            vec![tag(1, "sitting"), tag(2, "standing"), tag(3, "jumping")],
            vec![tag(4, "lying")],
        );
        let mut state = before.clone();
        assert!(state.assign(2));
        assert!(state.unassign(2));

        assert_eq!(sorted(state.available.clone()), sorted(before.available.clone()));
        assert_eq!(state.assigned, before.assigned);
    }

    #[test]
    fn test_unknown_tags_are_ignored() {
        let mut state = TagAssignments::new(vec![tag(1, "sitting")], vec![]);
        assert!(!state.assign(9));
        assert!(!state.unassign(1));
        assert_eq!(state.available.len(), 1);
        assert!(state.assigned.is_empty());
    }
}
