//! WebDAV implementation of the remote file client.
//!
//! Favorites are stored server-side as the `oc:favorite` dead property and
//! changed with a `PROPPATCH` on the file's DAV URL.

use files_core::{ClientError, RemoteFileClient};

use crate::config::{FAVORITE_TIMEOUT_MS, OC_NAMESPACE};
use crate::core::server::ServerConfig;
use crate::utils::{HttpRequest, send};

/// Remote file client talking to an ownCloud-compatible WebDAV endpoint.
#[derive(Clone, Debug)]
pub struct WebDavClient {
    server: ServerConfig,
}

impl WebDavClient {
    pub fn new(server: ServerConfig) -> Self {
        Self { server }
    }

    /// Headers for a PROPPATCH request.
    fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Content-Type", "application/xml; charset=utf-8".to_string())];
        if let Some(token) = self.server.token() {
            headers.push(("Authorization", format!("Bearer {}", token)));
        }
        headers
    }
}

/// PROPPATCH body setting `oc:favorite` to `1` or `0`.
pub fn favorite_body(value: bool) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0"?>"#,
            r#"<d:propertyupdate xmlns:d="DAV:" xmlns:oc="{ns}">"#,
            "<d:set><d:prop><oc:favorite>{value}</oc:favorite></d:prop></d:set>",
            "</d:propertyupdate>",
        ),
        ns = OC_NAMESPACE,
        value = u8::from(value),
    )
}

impl RemoteFileClient for WebDavClient {
    async fn favorite(&self, path: &str, value: bool) -> Result<(), ClientError> {
        let url = self.server.files_url(path);
        let request = HttpRequest {
            method: "PROPPATCH",
            url: &url,
            headers: self.headers(),
            body: Some(favorite_body(value)),
        };

        // 207 Multi-Status counts as success; per-property failures are not
        // inspected.
        send(&request, FAVORITE_TIMEOUT_MS).await?;
        Ok(())
    }
}
