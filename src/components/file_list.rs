//! File list component.
//!
//! One row per known file with a selection checkbox and a favorite star.
//! The toolbar shows the selection through the `selectedFiles` getter.

use files_core::{FileEntry, SelectedFiles};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/file_list.module.css");

/// Toolbar label for the current selection.
fn selection_label(selected: SelectedFiles<'_>) -> String {
    match selected {
        SelectedFiles::Empty => "No selection".to_string(),
        SelectedFiles::NonEmpty(files) if files.len() == 1 => {
            format!("{} selected", files[0].name())
        }
        SelectedFiles::NonEmpty(files) => format!("{} items selected", files.len()),
    }
}

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let files = ctx.files;

    let label = Signal::derive(move || files.selected_files(selection_label));
    let has_selection = Signal::derive(move || !files.selected_files(|s| s.is_empty()));

    view! {
        <div class=css::list role="grid" aria-label="File list">
            <div class=css::toolbar>
                <span class=css::title>{APP_NAME}</span>
                <span class=css::selectionInfo>{label}</span>
                <Show when=move || has_selection.get()>
                    <button
                        class=css::clearButton
                        aria-label="Clear selection"
                        on:click=move |_| files.reset_file_selection()
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </Show>
            </div>

            {move || files.last_error.get().map(|msg| view! {
                <div class=css::error role="alert">{msg}</div>
            })}

            <Show
                when=move || !files.files().is_empty()
                fallback=|| view! { <div class=css::empty>"No files"</div> }
            >
                <For
                    each=move || files.files()
                    key=|entry| entry.path.clone()
                    children=move |entry| view! { <FileRow entry=entry /> }
                />
            </Show>
        </div>
    }
}

#[component]
fn FileRow(entry: FileEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let files = ctx.files;

    let path = entry.path.clone();
    let is_dir = entry.meta.get("type").and_then(|t| t.as_str()) == Some("folder");
    let display_name = entry.name().to_string();
    let icon = if is_dir { ic::FOLDER } else { ic::FILE };

    // Rows are keyed by path, so read the live entry from the store.
    let current = {
        let path = path.clone();
        Signal::derive(move || {
            files
                .find(&path)
                .unwrap_or_else(|| FileEntry::new(path.clone()))
        })
    };
    let selected = {
        let path = path.clone();
        Signal::derive(move || files.selected_entry(&path))
    };
    let is_selected = Signal::derive(move || selected.with(Option::is_some));
    let starred = Signal::derive(move || current.get().starred);
    let pending = Signal::derive(move || files.is_favorite_pending(&path));

    let handle_select = move |_: leptos::ev::Event| match selected.get_untracked() {
        Some(entry) => files.remove_file_selection(entry),
        None => files.add_file_selection(current.get_untracked()),
    };

    let handle_star = move |_: leptos::ev::MouseEvent| {
        files.mark_favorite(current.get_untracked());
    };

    let row_class = move || {
        if is_selected.get() {
            format!("{} {}", css::row, css::rowSelected)
        } else {
            css::row.to_string()
        }
    };

    let star_class = move || {
        if starred.get() {
            format!("{} {}", css::star, css::starActive)
        } else {
            css::star.to_string()
        }
    };

    view! {
        <div class=row_class role="row" aria-selected=move || is_selected.get()>
            <input
                type="checkbox"
                aria-label=format!("Select {}", display_name)
                prop:checked=move || is_selected.get()
                on:change=handle_select
            />
            <span aria-hidden="true">
                <Icon icon=icon />
            </span>
            <span class=css::name>{display_name.clone()}</span>
            <button
                class=star_class
                aria-label=move || if starred.get() { "Remove from favorites" } else { "Add to favorites" }
                aria-pressed=move || starred.get()
                disabled=move || pending.get()
                on:click=handle_star
            >
                {move || {
                    let icon = if starred.get() { ic::STAR_FILLED } else { ic::STAR };
                    view! { <Icon icon=icon /> }
                }}
            </button>
        </div>
    }
}
