//! HTTP helpers for the REST API.
//!
//! Every request carries the stored bearer token; non-2xx answers become
//! `ApiError::Status` with the server's `message` when the body has one.

use std::sync::OnceLock;

use contracts::shared::ApiErrorBody;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::shared::config::AppConfig;
use crate::system::auth::storage;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Not signed in")]
    NotAuthenticated,
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::NotAuthenticated | ApiError::Status { status: 401, .. })
    }

    /// Builds the status error from a response body, falling back to the
    /// status text when the body has no usable `message`.
    pub fn from_status(status: u16, status_text: &str, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .map(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                if status_text.is_empty() {
                    format!("Request failed with status {}", status)
                } else {
                    format!("Request failed: {} {}", status, status_text)
                }
            });
        ApiError::Status { status, message }
    }
}

/// Base URL of the REST API, resolved once per page load
pub fn api_base() -> &'static str {
    static BASE: OnceLock<String> = OnceLock::new();
    BASE.get_or_init(|| AppConfig::default().api_base)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn with_auth(builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
    let token = storage::get_access_token().ok_or(ApiError::NotAuthenticated)?;
    Ok(builder.header("Authorization", &format!("Bearer {}", token)))
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_status(status, &status_text, &body);
    log::error!("{} {}: {}", status, response.url(), err);
    Err(err)
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await
}

async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
    let request = builder
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = send(with_auth(Request::get(&api_url(path)))?).await?;
    decode(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = send_json(with_auth(Request::post(&api_url(path)))?, body).await?;
    decode(response).await
}

/// POST without a body, for state transitions like approve or cancel
pub async fn post_action<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = send(with_auth(Request::post(&api_url(path)))?).await?;
    decode(response).await
}

/// POST whose answer body is ignored
pub async fn post_no_content(path: &str) -> Result<(), ApiError> {
    send(with_auth(Request::post(&api_url(path)))?).await?;
    Ok(())
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = send_json(with_auth(Request::put(&api_url(path)))?, body).await?;
    decode(response).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    send(with_auth(Request::delete(&api_url(path)))?).await?;
    Ok(())
}

/// Requests that go out before a token exists (login)
pub async fn post_public<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = send_json(Request::post(&api_url(path)), body).await?;
    decode(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_uses_body_message() {
        let err = ApiError::from_status(409, "Conflict", r#"{"message":"Class is full"}"#);
        assert_eq!(err.to_string(), "Class is full");
        assert_eq!(
            err,
            ApiError::Status {
                status: 409,
                message: "Class is full".into()
            }
        );
    }

    #[test]
    fn test_status_error_without_body() {
        let err = ApiError::from_status(500, "Internal Server Error", "<html>oops</html>");
        assert_eq!(err.to_string(), "Request failed: 500 Internal Server Error");
        let err = ApiError::from_status(502, "", r#"{"message":"  "}"#);
        assert_eq!(err.to_string(), "Request failed with status 502");
    }

    #[test]
    fn test_unauthorized() {
        assert!(ApiError::NotAuthenticated.is_unauthorized());
        assert!(ApiError::from_status(401, "Unauthorized", "").is_unauthorized());
        assert!(!ApiError::Network("offline".into()).is_unauthorized());
    }
}
