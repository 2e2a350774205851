//! Reactive wiring of the files store.
//!
//! The [`FileStore`] lives in a Leptos signal so components re-render when
//! it changes. Every action goes through a [`FilesModule`] built over that
//! signal, the WebDAV client and a console sink.

use files_core::{
    FavoriteOutcome, FileEntry, FileStore, FilesModule, ReportSink, SelectedFiles,
    StoreError, StoreHandle,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::core::webdav::WebDavClient;

/// [`FileStore`] held in a signal.
#[derive(Clone, Copy)]
pub struct ReactiveStore(pub RwSignal<FileStore>);

impl StoreHandle for ReactiveStore {
    fn with<R>(&self, f: impl FnOnce(&FileStore) -> R) -> R {
        self.0.with(f)
    }

    fn update<R>(&self, f: impl FnOnce(&mut FileStore) -> R) -> R {
        f(&mut *self.0.write())
    }
}

/// Reports failures to the browser console and keeps the last message for
/// display.
#[derive(Clone, Copy)]
pub struct ConsoleSink {
    last_error: RwSignal<Option<String>>,
}

impl ReportSink for ConsoleSink {
    fn report(&self, error: &StoreError) {
        let message = error.to_string();
        web_sys::console::error_1(&message.clone().into());
        self.last_error.set(Some(message));
    }
}

/// Files state managed with Leptos signals.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos handles, which are
/// cheap to copy.
#[derive(Clone, Copy)]
pub struct FilesContext {
    /// Known files and the current selection.
    pub store: ReactiveStore,
    /// Message of the last failed action, cleared by the next success.
    pub last_error: RwSignal<Option<String>>,
    client: StoredValue<WebDavClient>,
}

impl FilesContext {
    /// Creates an empty store bound to `client`.
    pub fn new(client: WebDavClient) -> Self {
        Self {
            store: ReactiveStore(RwSignal::new(FileStore::new())),
            last_error: RwSignal::new(None),
            client: StoredValue::new(client),
        }
    }

    fn module(&self) -> FilesModule<ReactiveStore, WebDavClient, ConsoleSink> {
        FilesModule::with_sink(
            self.store,
            self.client.get_value(),
            ConsoleSink {
                last_error: self.last_error,
            },
        )
    }

    /// Read the `selectedFiles` getter (tracked).
    pub fn selected_files<T>(&self, f: impl FnOnce(SelectedFiles<'_>) -> T) -> T {
        self.store.with(|s| f(s.selected_files()))
    }

    /// Known files (tracked).
    pub fn files(&self) -> Vec<FileEntry> {
        self.store.with(|s| s.files().to_vec())
    }

    /// Current state of the file at `path` (tracked).
    pub fn find(&self, path: &str) -> Option<FileEntry> {
        self.store.with(|s| s.find(path).cloned())
    }

    /// Selected copy of the file at `path` (tracked).
    ///
    /// Matches by path so a row stays checked after `loadFiles` refreshes
    /// the entry's metadata. Removing the returned copy keeps the store's
    /// structural removal hitting the entry that was actually selected.
    pub fn selected_entry(&self, path: &str) -> Option<FileEntry> {
        self.selected_files(|s| find_selected(s, path).cloned())
    }

    pub fn is_favorite_pending(&self, path: &str) -> bool {
        self.store.with(|s| s.is_favorite_pending(path))
    }

    pub fn load_files(&self, files: Vec<FileEntry>) {
        self.module().load_files(files);
    }

    pub fn add_file_selection(&self, file: FileEntry) {
        self.module().add_file_selection(file);
    }

    pub fn remove_file_selection(&self, file: FileEntry) {
        self.module().remove_file_selection(file);
    }

    pub fn reset_file_selection(&self) {
        self.module().reset_file_selection();
    }

    /// Toggle a favorite and wait for the server.
    ///
    /// Failures have already been reported to the console when this returns.
    pub async fn toggle_favorite(&self, file: FileEntry) -> Result<FavoriteOutcome, StoreError> {
        let result = self.module().mark_favorite(&file).await;
        if result.is_ok() {
            self.last_error.set(None);
        }
        result
    }

    /// Fire-and-forget `markFavorite` for event handlers.
    pub fn mark_favorite(&self, file: FileEntry) {
        let ctx = *self;
        let path = file.path.clone();
        spawn_local(async move {
            let result = ctx.toggle_favorite(file).await;
            // Failures were already reported by the console sink.
            if let Some(note) = outcome_note(&path, &result) {
                web_sys::console::debug_1(&note.into());
            }
        });
    }
}

fn find_selected<'a>(selected: SelectedFiles<'a>, path: &str) -> Option<&'a FileEntry> {
    selected.as_slice().iter().find(|f| f.path == path)
}

/// Console note for a settled toggle that did not reach the store.
fn outcome_note(path: &str, result: &Result<FavoriteOutcome, StoreError>) -> Option<String> {
    match result {
        Ok(FavoriteOutcome::Superseded) => {
            Some(format!("favorite for {} superseded by a newer toggle", path))
        }
        Ok(FavoriteOutcome::Applied { .. }) | Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use files_core::ClientError;

    use super::*;

    #[test]
    fn test_find_selected_matches_by_path() {
        let selected = [
            FileEntry::new("/a").with_meta("size", 1),
            FileEntry::new("/b"),
        ];
        let refreshed = FileEntry::new("/a").with_meta("size", 2);

        let found = find_selected(SelectedFiles::NonEmpty(&selected), &refreshed.path);
        assert_eq!(found, Some(&selected[0]));
        assert_eq!(find_selected(SelectedFiles::NonEmpty(&selected), "/c"), None);
        assert_eq!(find_selected(SelectedFiles::Empty, "/a"), None);
    }

    #[test]
    fn test_outcome_note() {
        assert_eq!(
            outcome_note("/a", &Ok(FavoriteOutcome::Superseded)).as_deref(),
            Some("favorite for /a superseded by a newer toggle")
        );
        assert_eq!(outcome_note("/a", &Ok(FavoriteOutcome::Applied { starred: true })), None);

        let failed = Err(StoreError::Favorite {
            path: "/a".to_string(),
            source: ClientError::Timeout,
        });
        assert_eq!(outcome_note("/a", &failed), None);
    }
}
