//! Action dispatcher for the files store.

use crate::action::{Action, Mutation};
use crate::client::RemoteFileClient;
use crate::error::StoreError;
use crate::handle::StoreHandle;
use crate::models::{FileEntry, SelectedFiles};
use crate::report::{ReportSink, TracingSink};

/// Outcome of a successful `markFavorite`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteOutcome {
    /// Server accepted the change and the store now holds `starred`
    Applied { starred: bool },
    /// Server accepted the change, but a newer toggle for the same path was
    /// dispatched meanwhile; the store was left to that one
    Superseded,
}

/// Result of [`FilesModule::dispatch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatched {
    /// A synchronous action committed its mutation, touching this many entries
    Committed { touched: usize },
    /// A favorite toggle settled
    Favorite(FavoriteOutcome),
}

/// The files module: a store handle, the remote client and a report sink.
///
/// # Favorite toggles
///
/// `markFavorite` never updates the store optimistically. The new value is
/// derived from the entry passed in, sent to the client, and committed by
/// path only after the client succeeds. Concurrent toggles are not queued:
/// the most recently dispatched toggle for a path is the only one allowed to
/// commit on success, so out-of-order responses cannot resurrect a stale
/// value. If that toggle fails after an older one succeeded, the store falls
/// back to the older, server-acknowledged value.
#[derive(Clone)]
pub struct FilesModule<S, C, R = TracingSink> {
    store: S,
    client: C,
    sink: R,
}

impl<S, C> FilesModule<S, C, TracingSink>
where
    S: StoreHandle,
    C: RemoteFileClient,
{
    /// Create a module reporting failures through `tracing`.
    pub fn new(store: S, client: C) -> Self {
        Self::with_sink(store, client, TracingSink)
    }
}

impl<S, C, R> FilesModule<S, C, R>
where
    S: StoreHandle,
    C: RemoteFileClient,
    R: ReportSink,
{
    pub fn with_sink(store: S, client: C, sink: R) -> Self {
        Self {
            store,
            client,
            sink,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the `selectedFiles` getter.
    pub fn selected_files<T>(&self, f: impl FnOnce(SelectedFiles<'_>) -> T) -> T {
        self.store.with(|s| f(s.selected_files()))
    }

    /// Dispatch an action by value.
    pub async fn dispatch(&self, action: Action) -> Result<Dispatched, StoreError> {
        tracing::debug!(action = %action, "dispatch");
        match action {
            Action::MarkFavorite(file) => self.mark_favorite(&file).await.map(Dispatched::Favorite),
            other => {
                let touched = other.into_mutation().map_or(0, |m| self.commit(m));
                Ok(Dispatched::Committed { touched })
            }
        }
    }

    pub fn load_files(&self, files: Vec<FileEntry>) {
        self.commit(Mutation::LoadFiles(files));
    }

    pub fn add_file_selection(&self, file: FileEntry) {
        self.commit(Mutation::AddFileSelection(file));
    }

    pub fn remove_file_selection(&self, file: FileEntry) {
        self.commit(Mutation::RemoveFileSelection(file));
    }

    pub fn reset_file_selection(&self) {
        self.commit(Mutation::ResetSelection);
    }

    /// Toggle the favorite flag of `file` on the server, then in the store.
    ///
    /// On failure the error is reported to the sink once and returned. The
    /// store is left untouched unless an older toggle for the same path was
    /// acknowledged, in which case it is brought in line with that one.
    pub async fn mark_favorite(&self, file: &FileEntry) -> Result<FavoriteOutcome, StoreError> {
        let ticket = self.store.update(|s| s.begin_favorite(file));

        match self.client.favorite(&ticket.path, ticket.value).await {
            Ok(()) => match self.store.update(|s| s.finish_favorite(&ticket)) {
                Some(starred) => Ok(FavoriteOutcome::Applied { starred }),
                None => {
                    tracing::debug!(path = %ticket.path, "favorite superseded by newer toggle");
                    Ok(FavoriteOutcome::Superseded)
                }
            },
            Err(source) => {
                if let Some(starred) = self.store.update(|s| s.abandon_favorite(&ticket)) {
                    tracing::debug!(path = %ticket.path, starred, "favorite restored to last acknowledged value");
                }
                let error = StoreError::Favorite {
                    path: ticket.path,
                    source,
                };
                self.sink.report(&error);
                Err(error)
            }
        }
    }

    fn commit(&self, mutation: Mutation) -> usize {
        self.store.update(|s| s.commit(mutation))
    }
}
