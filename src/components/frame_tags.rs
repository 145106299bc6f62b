//! Frame Tag Buttons
//!
//! One row of tag buttons per annotated frame. The chosen tag index goes into a
//! hidden `<frame>_tag` input that the annotation form posts.

use leptos::prelude::*;

use crate::models::TagOption;

/// Tag index 0 is the background tag
pub const BACKGROUND_TAG: u32 = 0;

/// Class marking the selected button of a frame
pub fn highlight_class(tag_index: u32) -> &'static str {
    if tag_index == BACKGROUND_TAG {
        "button-grey"
    } else {
        "uk-button-primary"
    }
}

#[component]
pub fn FrameTagButtons(
    /// Selected tag index per frame, in frame order
    annotations: Vec<u32>,
    /// Tags the buttons offer (background included)
    class_tags: Vec<TagOption>,
) -> impl IntoView {
    let frame_count = annotations.len();
    let selections = RwSignal::new(annotations);
    let class_tags = StoredValue::new(class_tags);

    let assign_tag = move |frame: usize, tag_index: u32| {
        selections.update(|all| {
            if let Some(slot) = all.get_mut(frame) {
                *slot = tag_index;
            }
        });
    };

    view! {
        <div class="frame-tags">
            {(0..frame_count).map(move |frame| {
                let selected = move || selections.with(|all| all.get(frame).copied());
                view! {
                    <div class="frame-tag-row uk-margin-small">
                        <span class="uk-text-meta">{format!("Frame {}", frame)}</span>
                        <input
                            type="hidden"
                            id=format!("{}_tag", frame)
                            name=format!("{}_tag", frame)
                            prop:value=move || selected().map(|t| t.to_string()).unwrap_or_default()
                        />
                        {class_tags.get_value().into_iter().map(move |tag| {
                            let tag_index = tag.index;
                            view! {
                                <button
                                    type="button"
                                    id=format!("{}_tag{}", frame, tag_index)
                                    class="uk-button uk-button-small uk-button-default"
                                    class=(highlight_class(tag_index), move || selected() == Some(tag_index))
                                    on:click=move |_| assign_tag(frame, tag_index)
                                >
                                    {tag.name}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_is_grey() {
        assert_eq!(highlight_class(BACKGROUND_TAG), "button-grey");
        assert_eq!(highlight_class(1), "uk-button-primary");
        assert_eq!(highlight_class(7), "uk-button-primary");
    }
}
