//! Content Loading Errors

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while reading, fetching or caching a content section.
///
/// None of these reach the visitor; they are logged and the page keeps
/// whatever it already shows.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Cached entry exists but is not a well-formed list
    #[error("cache entry `{key}` is malformed: {source}")]
    CacheRead {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Browser storage is missing, disabled or full
    #[error("storage unavailable: {0}")]
    Storage(String),

    /// Request never produced a response
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    /// Response arrived with a non-success status
    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    /// Body is not `{ "items": [...] }`
    #[error("{url} returned a malformed body: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ContentError {
    /// True for failures of the network step (request, status or body)
    pub fn is_network_failure(&self) -> bool {
        matches!(
            self,
            ContentError::Network { .. } | ContentError::Status { .. } | ContentError::Decode { .. }
        )
    }
}

/// Render a thrown JS value for logs and error messages
pub fn js_error_string(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| js_sys::JSON::stringify(value).ok().and_then(|s| s.as_string()))
        .unwrap_or_else(|| format!("{:?}", value))
}
