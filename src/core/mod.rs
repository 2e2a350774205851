//! Browser-facing services for the files store.
//!
//! This module provides:
//! - [`WebDavClient`] - Remote file client persisting favorites over WebDAV
//! - [`ServerConfig`] - Server URL, user and token
//! - [`FilesContext`] - Reactive handle dispatching the files actions

pub mod error;
mod files;
mod server;
mod webdav;

pub use files::FilesContext;
pub use server::ServerConfig;
pub use webdav::WebDavClient;
