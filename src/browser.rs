//! Browser-side sources and sinks: the embedded document, the remote
//! document, the JSON download and the theme switch.

use gloo::console;
use gloo::file::{Blob, ObjectUrl};
use gloo::net::http::Request;
use gloo::timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlAnchorElement, RequestCache};

use crate::config::{EMBEDDED_GLOBAL, REMOTE_DOCUMENT_PATH};
use crate::errors::SourceError;

/// The match document embedded by the page generator as
/// `window.INITIAL_MATCH_DATA`, serialized back to JSON.
pub fn embedded_document() -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(EMBEDDED_GLOBAL)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    if let Some(raw) = value.as_string() {
        return Some(raw);
    }
    js_sys::JSON::stringify(&value).ok().map(String::from)
}

/// Fetch `match.json` with caching disabled. A 404 means there is no remote
/// document, which is not an error.
pub async fn fetch_remote_document() -> Result<Option<String>, SourceError> {
    let response = Request::get(REMOTE_DOCUMENT_PATH)
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|e| SourceError::Fetch(e.to_string()))?;

    match response.status() {
        404 => Ok(None),
        _ if response.ok() => response
            .text()
            .await
            .map(Some)
            .map_err(|e| SourceError::Fetch(e.to_string())),
        status => Err(SourceError::Status(status)),
    }
}

/// Offer `contents` as a JSON file download.
pub fn download_document(file_name: &str, contents: &str) -> Result<(), SourceError> {
    let blob = Blob::new_with_options(contents, Some("application/json"));
    let url = ObjectUrl::from(blob);
    let anchor: HtmlAnchorElement = gloo::utils::document()
        .create_element("a")
        .map_err(|e| SourceError::Export(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|_| SourceError::Export("not an anchor element".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    // The URL must outlive this task or some browsers cancel the download
    Timeout::new(0, move || drop(url)).forget();
    console::log!(format!("exported {} ({} bytes)", file_name, contents.len()));
    Ok(())
}

/// Swap `theme-dark` and `theme-light` on `<body>`. Returns true when the
/// dark theme is now active.
pub fn toggle_theme() -> bool {
    let classes = gloo::utils::body().class_list();
    let (from, to) = if classes.contains("theme-dark") {
        ("theme-dark", "theme-light")
    } else {
        ("theme-light", "theme-dark")
    };
    if classes.replace(from, to).unwrap_or(false) {
        return to == "theme-dark";
    }
    // Neither class present yet
    if let Err(e) = classes.add_1(to) {
        console::warn!(format!("theme switch failed: {:?}", e));
    }
    to == "theme-dark"
}
