//! Content Fetching
//!
//! The network half of stale-while-revalidate. Sources hand back the raw
//! body of a successful response; decoding happens in the loader.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

use crate::contact::ContactMessage;
use crate::error::{js_error_string, ContentError};

/// Something that can GET a URL and return its body text
#[allow(async_fn_in_trait)]
pub trait ContentSource {
    /// Body of a 2xx response. Non-2xx is `ContentError::Status`.
    async fn fetch_text(&self, url: &str) -> Result<String, ContentError>;
}

/// `window.fetch`, no timeout and no retry
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFetch;

impl ContentSource for BrowserFetch {
    async fn fetch_text(&self, url: &str) -> Result<String, ContentError> {
        let network = |reason: String| ContentError::Network { url: url.to_string(), reason };

        let window = web_sys::window().ok_or_else(|| network("no window".into()))?;
        let value = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(|e| network(js_error_string(&e)))?;
        let response: Response = value.dyn_into().map_err(|e| network(js_error_string(&e)))?;

        if !response.ok() {
            return Err(ContentError::Status { url: url.to_string(), status: response.status() });
        }

        let body = response.text().map_err(|e| network(js_error_string(&e)))?;
        let text = JsFuture::from(body).await.map_err(|e| network(js_error_string(&e)))?;
        text.as_string().ok_or_else(|| network("response body is not text".into()))
    }
}

/// POST the contact message as multipart form data.
///
/// Only the response status matters; the body is ignored.
pub async fn post_contact(endpoint: &str, message: &ContactMessage) -> Result<(), String> {
    let js_err = |e: wasm_bindgen::JsValue| js_error_string(&e);

    let form = FormData::new().map_err(js_err)?;
    for (key, value) in message.form_fields() {
        form.append_with_str(key, value).map_err(js_err)?;
    }

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&form);
    let request = Request::new_with_str_and_init(endpoint, &init).map_err(js_err)?;
    request.headers().set("Accept", "application/json").map_err(js_err)?;

    let window = web_sys::window().ok_or("no window")?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;

    if response.ok() {
        Ok(())
    } else {
        Err(format!("form endpoint responded with HTTP {}", response.status()))
    }
}

/// Join a content base (`content/`, `/static/content`) and a file name
pub fn content_url(base: &str, path: &str) -> String {
    let base = base.trim();
    if base.is_empty() {
        return path.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
