//! Error Types
//!
//! Failures surfaced by the backend command layer and the widget bootstrap.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Fetch itself failed (network down, CORS, aborted)
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The body was not the JSON we expected
    #[error("unexpected response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("could not encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// The backend answered with `success: false`
    #[error("{endpoint} rejected the request")]
    Rejected { endpoint: &'static str },
}

impl ApiError {
    pub fn transport(url: &str, err: JsValue) -> Self {
        ApiError::Transport {
            url: url.to_string(),
            message: describe_js_error(&err),
        }
    }

    pub fn decode(url: &str, message: impl Into<String>) -> Self {
        ApiError::Decode {
            url: url.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("unknown widget kind `{0}`")]
    UnknownKind(String),

    #[error("invalid props for `{kind}`: {source}")]
    Props {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Best-effort human readable text for a thrown JS value
pub fn describe_js_error(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
