//! Core state for the files browser.
//!
//! This crate provides:
//! - [`FileEntry`], [`SelectedFiles`] - File records and the selection view
//! - [`FileStore`] - Known files plus the current selection
//! - [`Action`], [`Mutation`] - Namespaced dispatch surface used by the UI
//! - [`FilesModule`] - Dispatcher that relays favorite toggles to a
//!   [`RemoteFileClient`] and reconciles the store on success
//!
//! Nothing here touches the browser; the web shell supplies the client,
//! the reactive store handle and the report sink.

pub mod action;
pub mod client;
pub mod error;
mod handle;
pub mod models;
mod module;
pub mod report;
mod store;

pub use action::{Action, Mutation, GETTER_SELECTED_FILES, NAMESPACE};
pub use client::RemoteFileClient;
#[cfg(any(test, feature = "mock"))]
pub use client::mock::MockClient;
pub use error::{ClientError, StoreError};
pub use handle::{SharedStore, StoreHandle};
pub use models::{FileEntry, SelectedFiles};
pub use module::{Dispatched, FavoriteOutcome, FilesModule};
pub use report::{ReportSink, TracingSink};
pub use store::{FavoriteTicket, FileStore};
