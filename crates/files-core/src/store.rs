//! The files store: known entries and the user's selection.

use std::collections::HashMap;

use crate::action::Mutation;
use crate::models::{FileEntry, SelectedFiles};

/// A favorite toggle that has been sent but not yet settled.
///
/// Every `markFavorite` takes a fresh ticket for its path. Only the most
/// recent ticket per path commits on success; older ones resolve as
/// superseded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FavoriteTicket {
    /// Path being toggled
    pub path: String,
    /// Value requested from the server
    pub value: bool,
    seq: u64,
}

/// Favorite toggles still open for one path.
#[derive(Clone, Debug, Default)]
struct InFlight {
    /// Ticket of the most recent toggle
    latest: u64,
    /// Toggles sent and not yet settled
    outstanding: usize,
    /// Newest ticket the server acknowledged, with its value
    confirmed: Option<(u64, bool)>,
}

/// Authoritative in-process state of the files module.
///
/// `files` and `selected` are independent: a selected entry need not be
/// part of the current file list, and loading files leaves the selection
/// alone.
#[derive(Clone, Debug, Default)]
pub struct FileStore {
    files: Vec<FileEntry>,
    selected: Vec<FileEntry>,
    /// Open favorite toggles per path
    in_flight: HashMap<String, InFlight>,
    next_seq: u64,
}

impl FileStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Known files, in load order.
    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    /// First known file with this path.
    pub fn find(&self, path: &str) -> Option<&FileEntry> {
        self.files.iter().find(|f| f.path == path)
    }

    /// The `selectedFiles` getter.
    pub fn selected_files(&self) -> SelectedFiles<'_> {
        SelectedFiles::from_slice(&self.selected)
    }

    /// Whether a favorite toggle for this path is still awaiting the server.
    pub fn is_favorite_pending(&self, path: &str) -> bool {
        self.in_flight.contains_key(path)
    }

    /// Apply a mutation. Returns the number of entries it touched.
    pub fn commit(&mut self, mutation: Mutation) -> usize {
        let name = mutation.name();
        let touched = match mutation {
            Mutation::LoadFiles(files) => {
                self.files = files;
                self.files.len()
            }
            Mutation::AddFileSelection(file) => {
                self.selected.push(file);
                1
            }
            Mutation::RemoveFileSelection(file) => self.remove_selection(&file),
            Mutation::ResetSelection => {
                let removed = self.selected.len();
                self.selected.clear();
                removed
            }
            Mutation::FavoriteFile { path, starred } => self.set_starred(&path, starred),
        };
        tracing::debug!(mutation = name, touched, "committed");
        touched
    }

    fn remove_selection(&mut self, file: &FileEntry) -> usize {
        let before = self.selected.len();
        if before > 1 {
            self.selected.retain(|s| s != file);
        } else {
            // At most one entry left: clear regardless of the payload.
            self.selected.clear();
        }
        before - self.selected.len()
    }

    /// Set `starred` on every entry with `path`, in both collections.
    fn set_starred(&mut self, path: &str, starred: bool) -> usize {
        let mut touched = 0;
        for file in self
            .files
            .iter_mut()
            .chain(self.selected.iter_mut())
            .filter(|f| f.path == path)
        {
            file.starred = starred;
            touched += 1;
        }
        touched
    }

    fn commit_favorite(&mut self, path: &str, starred: bool) -> usize {
        self.commit(Mutation::FavoriteFile {
            path: path.to_string(),
            starred,
        })
    }

    // =========================================================================
    // Favorite tickets
    // =========================================================================

    /// Register a favorite toggle for `entry`, reading its current flag.
    pub fn begin_favorite(&mut self, entry: &FileEntry) -> FavoriteTicket {
        self.next_seq += 1;
        let seq = self.next_seq;
        let state = self.in_flight.entry(entry.path.clone()).or_default();
        state.latest = seq;
        state.outstanding += 1;
        FavoriteTicket {
            path: entry.path.clone(),
            value: !entry.starred,
            seq,
        }
    }

    /// Whether no newer toggle has been started for the ticket's path.
    pub fn is_latest(&self, ticket: &FavoriteTicket) -> bool {
        self.in_flight
            .get(&ticket.path)
            .is_some_and(|state| state.latest == ticket.seq)
    }

    /// Settle a ticket whose remote call succeeded.
    ///
    /// Returns the committed value when this ticket's value reached the
    /// store, or `None` when a newer toggle owns the path. A superseded
    /// success is still remembered: if every newer toggle for the path then
    /// fails, the store ends on the newest value the server acknowledged.
    pub fn finish_favorite(&mut self, ticket: &FavoriteTicket) -> Option<bool> {
        let state = self.in_flight.get_mut(&ticket.path)?;
        if state.confirmed.is_none_or(|(seq, _)| seq < ticket.seq) {
            state.confirmed = Some((ticket.seq, ticket.value));
        }
        let is_latest = state.latest == ticket.seq;
        if is_latest {
            self.commit_favorite(&ticket.path, ticket.value);
        }
        if let Some((seq, value)) = self.settle(&ticket.path) {
            self.commit_favorite(&ticket.path, value);
            if seq == ticket.seq {
                return Some(value);
            }
        }
        is_latest.then_some(ticket.value)
    }

    /// Settle a ticket whose remote call failed.
    ///
    /// Leaves entries alone unless this was the last open toggle for the
    /// path and an older toggle succeeded, in which case that confirmed
    /// value is committed and returned.
    pub fn abandon_favorite(&mut self, ticket: &FavoriteTicket) -> Option<bool> {
        let (_, value) = self.settle(&ticket.path)?;
        self.commit_favorite(&ticket.path, value);
        Some(value)
    }

    /// Close one toggle for `path`. Once none are open, drops the path's
    /// state and returns the newest confirmed value if it was never
    /// committed.
    fn settle(&mut self, path: &str) -> Option<(u64, bool)> {
        let state = self.in_flight.get_mut(path)?;
        state.outstanding = state.outstanding.saturating_sub(1);
        if state.outstanding > 0 {
            return None;
        }
        let state = self.in_flight.remove(path)?;
        state.confirmed.filter(|(seq, _)| *seq != state.latest)
    }
}
