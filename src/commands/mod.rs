//! Backend Command Wrappers
//!
//! Typed bindings to the project console's JSON endpoints, organized by domain.

mod directory;
mod settings;
mod tag;
mod counterpart;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::config;
use crate::error::ApiError;

// Re-export all public items
pub use directory::*;
pub use settings::*;
pub use tag::*;
pub use counterpart::*;

/// One round trip to the backend.
///
/// With a payload this is a POST carrying it as a JSON body, otherwise a GET.
/// The reply is decoded as JSON whatever its HTTP status.
pub async fn request<P, T>(path: &str, payload: Option<&P>) -> Result<T, ApiError>
where
    P: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let url = config::get().endpoint(path);

    let init = RequestInit::new();
    match payload {
        Some(payload) => {
            let body = serde_json::to_string(payload)?;
            init.set_method("POST");
            init.set_body(&JsValue::from_str(&body));
        }
        None => init.set_method("GET"),
    }

    let request = Request::new_with_str_and_init(&url, &init)
        .map_err(|e| ApiError::transport(&url, e))?;
    if payload.is_some() {
        request
            .headers()
            .set("Content-type", "application/json; charset=utf-8")
            .map_err(|e| ApiError::transport(&url, e))?;
    }

    let response = JsFuture::from(leptos::prelude::window().fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::transport(&url, e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::decode(&url, "fetch did not yield a Response"))?;

    let json = response
        .json()
        .map_err(|e| ApiError::transport(&url, e))?;
    let json = JsFuture::from(json)
        .await
        .map_err(|e| ApiError::decode(&url, crate::error::describe_js_error(&e)))?;

    log::debug!("[request] {} -> {}", url, response.status());
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::decode(&url, e.to_string()))
}

/// POST with a JSON body
pub async fn post<P, T>(path: &str, payload: &P) -> Result<T, ApiError>
where
    P: Serialize + ?Sized,
    T: DeserializeOwned,
{
    request(path, Some(payload)).await
}
