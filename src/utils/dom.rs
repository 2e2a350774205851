//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs.

use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Origin of the current page (e.g. `https://cloud.example.com`).
pub fn origin() -> Option<String> {
    window()?.location().origin().ok()
}
