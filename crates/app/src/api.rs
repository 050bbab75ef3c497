//! HTTP bindings for the authentication endpoint via the browser fetch API.

use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use orgdesk_auth::{classify_response, Credentials, SignInError};

use crate::config;

/// POST `credentials` to the login endpoint and classify the response.
///
/// No retry and no timeout of our own; the caller waits on the transport's
/// behavior.
pub async fn sign_in(base_url: &str, credentials: &Credentials) -> Result<String, SignInError> {
    let (status, body) = post_json(&config::login_url(base_url), credentials).await?;
    classify_response(status, &body)
}

/// POST a JSON payload and return the response status plus parsed JSON body.
///
/// Anything that keeps the exchange from producing parsed JSON (no window
/// object, network failure, unparseable body) maps to
/// [`SignInError::Transport`].
async fn post_json(url: &str, payload: &impl serde::Serialize) -> Result<(u16, Value), SignInError> {
    let body = serde_json::to_string(payload)
        .map_err(|e| SignInError::Transport(format!("failed to encode request body: {e}")))?;

    let headers = Headers::new().map_err(as_transport)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(as_transport)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(url, &opts).map_err(as_transport)?;
    let window = web_sys::window()
        .ok_or_else(|| SignInError::Transport("no window object".to_string()))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(as_transport)?;
    let response: Response = response.dyn_into().map_err(as_transport)?;
    let status = response.status();

    let json = JsFuture::from(response.json().map_err(as_transport)?)
        .await
        .map_err(as_transport)?;
    let body: Value = serde_wasm_bindgen::from_value(json)
        .map_err(|e| SignInError::Transport(format!("failed to decode response body: {e}")))?;

    Ok((status, body))
}

fn as_transport(err: JsValue) -> SignInError {
    SignInError::Transport(format!("{err:?}"))
}
