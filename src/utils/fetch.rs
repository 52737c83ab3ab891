//! Network fetching with timeout support.
//!
//! The listing is fetched once per mount, so there is no response cache.
//! Every request is raced against [`FETCH_TIMEOUT_MS`].

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::error::FetchError;

// =============================================================================
// Timeout
// =============================================================================

/// Await `promise`, giving up after `timeout_ms`.
///
/// A window timer resolves to `undefined` and is raced against `promise` with
/// `Promise.race`. A fetch never resolves to `undefined`, so that value means
/// the timer won.
///
/// # Errors
/// * [`FetchError::NoWindow`] if there is no window to schedule the timer on
/// * [`FetchError::Timeout`] if the timer fires first
/// * [`FetchError::NetworkError`] if `promise` rejects
async fn with_timeout(promise: Promise, timeout_ms: i32) -> Result<JsValue, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;
    let timer = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let contenders = Array::of2(&promise, &timer);
    let winner = JsFuture::from(Promise::race(&contenders))
        .await
        .map_err(|e| FetchError::NetworkError(e.as_string().unwrap_or_else(|| "Unknown error".to_string())))?;

    if winner.is_undefined() {
        return Err(FetchError::Timeout);
    }
    Ok(winner)
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Fetch and parse JSON from a same-origin URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let body = get_text(url).await?;
    serde_json::from_str(&body).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// GET `url` and return the body as text.
///
/// Non-2xx responses fail with [`FetchError::HttpError`] without reading the
/// body.
async fn get_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::SameOrigin);
    let request =
        Request::new_with_str_and_init(url, &init).map_err(|_| FetchError::RequestCreationFailed)?;

    let response: Response = with_timeout(window.fetch_with_request(&request), FETCH_TIMEOUT_MS)
        .await?
        .dyn_into()
        .map_err(|_| FetchError::InvalidContent)?;
    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    let read = response.text().map_err(|_| FetchError::ResponseReadFailed)?;
    JsFuture::from(read)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?
        .as_string()
        .ok_or(FetchError::InvalidContent)
}
