//! Network utilities with timeout support.
//!
//! Thin wrappers over the Fetch API: a JSON GET for the file manifest and a
//! generic request used by the WebDAV client.

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;
use crate::utils::dom;

// =============================================================================
// Promise Racing
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout using `Promise.race`.
///
/// The timeout promise resolves to `undefined`, so a promise that itself
/// resolves to `undefined` is reported as timed out.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = dom::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);

    match JsFuture::from(Promise::race(&race_array)).await {
        Ok(result) if result.is_undefined() => RaceResult::TimedOut,
        Ok(result) => RaceResult::Completed(result),
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| format!("{:?}", e))),
    }
}

// =============================================================================
// Requests
// =============================================================================

/// An outgoing HTTP request.
#[derive(Debug, Clone, Default)]
pub struct HttpRequest<'a> {
    pub method: &'a str,
    pub url: &'a str,
    pub headers: Vec<(&'a str, String)>,
    pub body: Option<String>,
}

/// Send a request and return the response if its status is 2xx.
pub async fn send(request: &HttpRequest<'_>, timeout_ms: i32) -> Result<Response, FetchError> {
    let window = dom::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method(request.method);
    opts.set_mode(RequestMode::Cors);

    let headers = Headers::new().map_err(|_| FetchError::RequestCreationFailed)?;
    for (name, value) in &request.headers {
        headers
            .set(name, value)
            .map_err(|_| FetchError::RequestCreationFailed)?;
    }
    opts.set_headers(&headers);

    if let Some(body) = &request.body {
        opts.set_body(&JsValue::from_str(body));
    }

    let req = Request::new_with_str_and_init(request.url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    match race_with_timeout(window.fetch_with_request(&req), timeout_ms).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;
            if !resp.ok() {
                return Err(FetchError::HttpError(resp.status()));
            }
            Ok(resp)
        }
    }
}

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let request = HttpRequest {
        method: "GET",
        url,
        ..Default::default()
    };
    let resp = send(&request, FETCH_TIMEOUT_MS).await?;

    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?
        .as_string()
        .ok_or(FetchError::InvalidContent)?;

    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}
