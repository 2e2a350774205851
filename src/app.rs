//! Root application module.
//!
//! Contains the main App component, the AppContext definition and the
//! startup wiring: server configuration, the WebDAV client and the initial
//! file list load.

use files_core::FileEntry;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::FileList;
use crate::config::FILES_MANIFEST_URL;
use crate::core::{FilesContext, ServerConfig, WebDavClient};
use crate::utils::fetch_json;

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read from any child with
/// `use_context::<AppContext>()`. The hosting shell owns the lifetime of the
/// files store: it is created here, once, and dropped with the root owner.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Files store (known entries, selection, favorites).
    pub files: FilesContext,
}

impl AppContext {
    pub fn new(client: WebDavClient) -> Self {
        Self {
            files: FilesContext::new(client),
        }
    }
}

/// Fetch the initial file list and dispatch `loadFiles`.
fn load_initial_files(ctx: AppContext) {
    spawn_local(async move {
        match fetch_json::<Vec<FileEntry>>(FILES_MANIFEST_URL).await {
            Ok(files) => ctx.files.load_files(files),
            Err(e) => {
                web_sys::console::warn_1(&format!("Failed to load file list: {}", e).into());
                ctx.files.last_error.set(Some(e.to_string()));
            }
        }
    });
}

/// Root application component with error boundary.
///
/// This component:
/// - Loads the server configuration and creates the WebDAV client
/// - Creates and provides the AppContext
/// - Renders the file list
#[component]
pub fn App() -> impl IntoView {
    let server = match ServerConfig::load() {
        Ok(server) => server,
        Err(e) => {
            return view! {
                <div role="alert">{format!("Configuration error: {}", e)}</div>
            }
            .into_any();
        }
    };

    let ctx = AppContext::new(WebDavClient::new(server));
    provide_context(ctx);
    load_initial_files(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div role="alert">
                    <h1>"Something went wrong"</h1>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <FileList />
        </ErrorBoundary>
    }
    .into_any()
}
