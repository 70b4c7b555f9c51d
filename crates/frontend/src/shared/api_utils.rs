//! HTTP plumbing shared by every API module.
//!
//! All endpoints speak JSON. Non-2xx responses are turned into
//! [`ApiError::Http`] carrying the server's `{error}` / `{message}` text when
//! the body has one.

use contracts::shared::api_message::ApiMessage;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::JsCast;

/// Name of the `<meta>` tag that may point the dashboard at another origin.
const API_BASE_META: &str = "recruit-api-base";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

/// Base URL for API requests.
///
/// Empty (same origin) unless the host page declares
/// `<meta name="recruit-api-base" content="http://host:5000">`.
pub fn api_base() -> String {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return String::new();
    };
    document
        .query_selector(&format!("meta[name=\"{}\"]", API_BASE_META))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
        .map(|meta| meta.content().trim_end_matches('/').to_string())
        .unwrap_or_default()
}

/// Build a full API URL from a path such as `/api/users`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Pick the most useful error text out of a failed response body.
pub fn error_message_from_body(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ApiMessage>(body)
        .ok()
        .and_then(|msg| msg.reason().map(str::to_string))
        .unwrap_or_else(|| fallback.to_string())
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn send_with_body<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
    let request: Request = builder
        .json(body)
        .map_err(|e| ApiError::Serialize(e.to_string()))?;
    request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Fail with the server's explanation when the response is not 2xx.
async fn ensure_ok(response: Response, fallback: &str) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Http {
        status,
        message: error_message_from_body(&body, fallback),
    })
}

async fn read_json<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T, ApiError> {
    let response = ensure_ok(response, fallback).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str, fallback: &str) -> Result<T, ApiError> {
    let response = send(Request::get(&api_url(path))).await?;
    read_json(response, fallback).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    fallback: &str,
) -> Result<T, ApiError> {
    let response = send_with_body(Request::post(&api_url(path)), body).await?;
    read_json(response, fallback).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    fallback: &str,
) -> Result<T, ApiError> {
    let response = send_with_body(Request::put(&api_url(path)), body).await?;
    read_json(response, fallback).await
}

pub async fn delete_json<T: DeserializeOwned>(path: &str, fallback: &str) -> Result<T, ApiError> {
    let response = send(Request::delete(&api_url(path))).await?;
    read_json(response, fallback).await
}

/// POST where only the status code matters; the body is ignored.
pub async fn post_status<B: Serialize>(path: &str, body: &B, fallback: &str) -> Result<(), ApiError> {
    let response = send_with_body(Request::post(&api_url(path)), body).await?;
    ensure_ok(response, fallback).await.map(|_| ())
}

/// PUT where only the status code matters; the body is ignored.
pub async fn put_status<B: Serialize>(path: &str, body: &B, fallback: &str) -> Result<(), ApiError> {
    let response = send_with_body(Request::put(&api_url(path)), body).await?;
    ensure_ok(response, fallback).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_text_prefers_server_error() {
        assert_eq!(
            error_message_from_body(r#"{"error":"User already exists"}"#, "Failed to add user."),
            "User already exists"
        );
        assert_eq!(
            error_message_from_body(r#"{"message":"Invalid filter"}"#, "fallback"),
            "Invalid filter"
        );
    }

    #[test]
    fn error_text_falls_back_on_unusable_body() {
        assert_eq!(error_message_from_body("<html>500</html>", "Server error"), "Server error");
        assert_eq!(error_message_from_body("{}", "Server error"), "Server error");
    }

    #[test]
    fn http_error_displays_message_only() {
        let err = ApiError::Http {
            status: 400,
            message: "Field name exists".into(),
        };
        assert_eq!(err.to_string(), "Field name exists");
        assert_eq!(
            ApiError::Network("offline".into()).to_string(),
            "Failed to send request: offline"
        );
    }
}
