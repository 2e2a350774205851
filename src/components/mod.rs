//! UI components built with Leptos.
//!
//! - [`FileList`] - File rows with selection and favorite toggles
//! - [`icons`] - Centralized icon definitions (change theme here)

mod file_list;
pub mod icons;

pub use file_list::FileList;
