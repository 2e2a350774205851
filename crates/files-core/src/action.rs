//! Dispatch surface of the files module.
//!
//! UI code talks to the store only through [`Action`]s (which may call the
//! remote client) and the `selectedFiles` getter. Actions translate into
//! [`Mutation`]s, the only operations that write to a [`FileStore`].
//!
//! [`FileStore`]: crate::FileStore

use std::fmt;

use crate::models::FileEntry;

/// Module namespace prefixed to every action and getter name.
pub const NAMESPACE: &str = "Files";

/// Name of the selection getter.
pub const GETTER_SELECTED_FILES: &str = "selectedFiles";

/// An action dispatched by the UI.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Replace the known file list
    LoadFiles(Vec<FileEntry>),
    /// Append one entry to the selection
    AddFileSelection(FileEntry),
    /// Remove an entry from the selection (see [`Mutation::RemoveFileSelection`])
    RemoveFileSelection(FileEntry),
    /// Clear the selection
    ResetFileSelection,
    /// Toggle the favorite flag through the remote client
    MarkFavorite(FileEntry),
}

impl Action {
    /// Unqualified action name (e.g. `loadFiles`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadFiles(_) => "loadFiles",
            Self::AddFileSelection(_) => "addFileSelection",
            Self::RemoveFileSelection(_) => "removeFileSelection",
            Self::ResetFileSelection => "resetFileSelection",
            Self::MarkFavorite(_) => "markFavorite",
        }
    }

    /// Namespaced action name (e.g. `Files/loadFiles`).
    pub fn qualified_name(&self) -> String {
        qualify(self.name())
    }

    /// The synchronous mutation this action commits, if any.
    ///
    /// `MarkFavorite` returns `None`: its mutation depends on the outcome of
    /// the remote call and is built by the dispatcher.
    pub fn into_mutation(self) -> Option<Mutation> {
        match self {
            Self::LoadFiles(files) => Some(Mutation::LoadFiles(files)),
            Self::AddFileSelection(file) => Some(Mutation::AddFileSelection(file)),
            Self::RemoveFileSelection(file) => Some(Mutation::RemoveFileSelection(file)),
            Self::ResetFileSelection => Some(Mutation::ResetSelection),
            Self::MarkFavorite(_) => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", NAMESPACE, self.name())
    }
}

/// A synchronous state change applied by [`FileStore::commit`].
///
/// [`FileStore::commit`]: crate::FileStore::commit
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    LoadFiles(Vec<FileEntry>),
    AddFileSelection(FileEntry),
    /// With more than one entry selected, drop every entry equal to the
    /// payload. Otherwise clear the selection, whatever the payload is.
    RemoveFileSelection(FileEntry),
    ResetSelection,
    /// Set the favorite flag on every entry with this path.
    FavoriteFile { path: String, starred: bool },
}

impl Mutation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadFiles(_) => "LOAD_FILES",
            Self::AddFileSelection(_) => "ADD_FILE_SELECTION",
            Self::RemoveFileSelection(_) => "REMOVE_FILE_SELECTION",
            Self::ResetSelection => "RESET_SELECTION",
            Self::FavoriteFile { .. } => "FAVORITE_FILE",
        }
    }
}

/// Prefix a name with the module namespace.
pub fn qualify(name: &str) -> String {
    format!("{}/{}", NAMESPACE, name)
}
