//! Data models for the files store.
//!
//! - [`FileEntry`] - One file or folder known to the browser
//! - [`SelectedFiles`] - Result of the `selectedFiles` getter

mod entry;
mod selection;

pub use entry::FileEntry;
pub use selection::SelectedFiles;
