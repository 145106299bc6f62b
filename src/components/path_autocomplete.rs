//! Path Autocomplete Component
//!
//! Text input suggesting filesystem paths from the directory-browse endpoint.
//! Used for project locations (directories only) and video files.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::config;
use crate::models::DirectoryBrowseResult;
use crate::sequencer::RequestSequence;

/// What the suggestion list offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionMode {
    /// `path-search` inputs
    Directories,
    /// `file-path-search` inputs: directories first, then video files
    DirectoriesAndFiles,
}

/// Suggestions for one browse result
pub fn suggestions_for(result: &DirectoryBrowseResult, mode: SuggestionMode) -> Vec<String> {
    let mut suggestions = result.subdirs.clone();
    if mode == SuggestionMode::DirectoriesAndFiles {
        suggestions.extend(result.video_files.iter().cloned());
    }
    suggestions
}

/// Path input with suggestions
///
/// Props:
/// - value: Signal holding the input text, shared with the owning form
/// - on_change: Runs on every edit and when a suggestion is picked, so the
///   owning form re-validates either way
#[component]
pub fn PathAutocomplete(
    value: RwSignal<String>,
    mode: SuggestionMode,
    #[prop(into)] name: String,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(into, default = Signal::stored(false))] invalid: Signal<bool>,
    #[prop(optional, into)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let (suggestions, set_suggestions) = signal(Vec::<String>::new());
    let (selected_idx, set_selected_idx) = signal(0usize);
    let sequence = RequestSequence::new();

    let notify = move |text: String| {
        if let Some(cb) = on_change {
            cb.run(text);
        }
    };

    let fetch_suggestions = move |term: String| {
        let cfg = config::get();
        let ticket = sequence.issue();
        if term.chars().count() < cfg.autocomplete_min_chars {
            set_suggestions.set(Vec::new());
            return;
        }
        spawn_local(async move {
            if !ticket.settle(cfg.debounce_ms).await {
                return;
            }
            match commands::browse_directory(&term, "").await {
                Ok(result) if ticket.is_current() => {
                    set_suggestions.set(suggestions_for(&result, mode));
                    set_selected_idx.set(0);
                }
                Ok(_) => log::debug!("[autocomplete] dropped stale suggestions for {}", term),
                Err(err) => log::warn!("[autocomplete] {}", err),
            }
        });
    };

    // Picking a suggestion behaves like typing it
    let pick = move |path: String| {
        value.set(path.clone());
        set_suggestions.set(Vec::new());
        set_selected_idx.set(0);
        notify(path);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let sugg = suggestions.get_untracked();
        if sugg.is_empty() {
            return;
        }
        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                let sel = selected_idx.get_untracked();
                if sel + 1 < sugg.len() {
                    set_selected_idx.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                let sel = selected_idx.get_untracked();
                if sel > 0 {
                    set_selected_idx.set(sel - 1);
                }
            }
            "Enter" | "Tab" => {
                ev.prevent_default();
                if let Some(path) = sugg.get(selected_idx.get_untracked()) {
                    pick(path.clone());
                }
            }
            "Escape" => set_suggestions.set(Vec::new()),
            _ => {}
        }
    };

    view! {
        <div class="path-autocomplete uk-inline uk-width-1-1">
            <input
                type="text"
                class="uk-input"
                class=("uk-form-danger", move || invalid.get())
                name=name
                id=id
                placeholder=placeholder
                autocomplete="off"
                prop:value=move || value.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    value.set(text.clone());
                    fetch_suggestions(text.clone());
                    notify(text);
                }
                on:keydown=on_keydown
                on:blur=move |_| set_suggestions.set(Vec::new())
            />

            {move || {
                let sugg = suggestions.get();
                if sugg.is_empty() {
                    view! { <div></div> }.into_any()
                } else {
                    let selected = selected_idx.get();
                    view! {
                        // mousedown fires before the input's blur clears the list
                        <div class="autocomplete-suggestions uk-box-shadow-small">
                            {sugg.into_iter().enumerate().map(|(i, path)| {
                                let path_for_click = path.clone();
                                view! {
                                    <div
                                        class=if i == selected { "autocomplete-suggestion selected" } else { "autocomplete-suggestion" }
                                        on:mousedown=move |ev| {
                                            ev.prevent_default();
                                            pick(path_for_click.clone());
                                        }
                                    >
                                        {path}
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home_listing() -> DirectoryBrowseResult {
        DirectoryBrowseResult {
            subdirs: vec!["a".into(), "b".into()],
            video_files: vec!["v.mp4".into()],
            path_exists: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_directory_suggestions_skip_files() {
        assert_eq!(suggestions_for(&home_listing(), SuggestionMode::Directories), vec!["a", "b"]);
    }

    #[test]
    fn test_file_suggestions_append_videos() {
        assert_eq!(
            suggestions_for(&home_listing(), SuggestionMode::DirectoriesAndFiles),
            vec!["a", "b", "v.mp4"]
        );
    }

    #[test]
    fn test_empty_listing() {
        let empty = DirectoryBrowseResult::default();
        assert!(suggestions_for(&empty, SuggestionMode::DirectoriesAndFiles).is_empty());
    }
}
