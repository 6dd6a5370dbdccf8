//! API utilities for talking to the blog REST API
//!
//! Every endpoint answers with the `{message, data}` envelope. The helpers
//! here attach the bearer token, map HTTP failures onto [`ApiError`] and
//! unwrap `data`.

use crate::config::config;
use crate::system::auth::bearer;
use contracts::shared::envelope::{Ack, ApiEnvelope};
use gloo_net::http::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },
    #[error("session expired, please log in again")]
    Unauthorized,
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("browser error: {0}")]
    Browser(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Build a full API URL from a path such as `/channels`
pub fn api_url(path: &str) -> String {
    format!("{}{}", config().api.base_url, path)
}

/// Map a non-success status and its body onto an error.
/// The server puts a human readable reason into `message`.
pub fn status_error(status: u16, body: &str) -> ApiError {
    if status == 401 {
        return ApiError::Unauthorized;
    }
    let message = serde_json::from_str::<Ack>(body)
        .ok()
        .map(|ack| ack.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.trim().chars().take(200).collect());
    ApiError::Status { status, message }
}

fn with_auth(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &bearer(token)),
        None => builder,
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(status_error(status, &body))
}

async fn read_data<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check(response).await?;
    response
        .json::<ApiEnvelope<T>>()
        .await
        .map(ApiEnvelope::into_data)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn read_ack(response: Response) -> Result<Ack, ApiError> {
    let response = check(response).await?;
    let body = response.text().await.unwrap_or_default();
    // Writes may answer with an empty body
    Ok(serde_json::from_str::<Ack>(&body).unwrap_or_default())
}

/// `GET` a path and return the envelope's `data`
pub async fn get_data<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    let url = api_url(path);
    log::debug!("GET {}", url);
    let response = with_auth(RequestBuilder::new(&url).method(Method::GET), token)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_data(response).await
}

/// Send a JSON body and return the envelope's `data`
pub async fn send_for_data<B, T>(
    method: Method,
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let url = api_url(path);
    log::debug!("{:?} {}", method, url);
    let response = with_auth(RequestBuilder::new(&url).method(method), token)
        .json(body)
        .map_err(|e| ApiError::Browser(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_data(response).await
}

/// Send a JSON body to an endpoint that only acknowledges the write
pub async fn send_for_ack<B: Serialize>(
    method: Method,
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<Ack, ApiError> {
    let url = api_url(path);
    log::debug!("{:?} {}", method, url);
    let response = with_auth(RequestBuilder::new(&url).method(method), token)
        .json(body)
        .map_err(|e| ApiError::Browser(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_ack(response).await
}

/// `DELETE` a path
pub async fn delete(path: &str, token: Option<&str>) -> Result<Ack, ApiError> {
    let url = api_url(path);
    log::debug!("DELETE {}", url);
    let response = with_auth(RequestBuilder::new(&url).method(Method::DELETE), token)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_ack(response).await
}

/// Post a multipart form (file uploads) and return the envelope's `data`
pub async fn post_form<T: DeserializeOwned>(
    path: &str,
    form: web_sys::FormData,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let url = api_url(path);
    log::debug!("POST (multipart) {}", url);
    let response = with_auth(RequestBuilder::new(&url).method(Method::POST), token)
        .body(form)
        .map_err(|e| ApiError::Browser(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_data(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_status_is_distinguished() {
        assert_eq!(status_error(401, "{}"), ApiError::Unauthorized);
        assert!(status_error(401, "").is_unauthorized());
    }

    #[test]
    fn server_message_is_preferred() {
        assert_eq!(
            status_error(400, r#"{"message":"title too long"}"#),
            ApiError::Status {
                status: 400,
                message: "title too long".into()
            }
        );
    }

    #[test]
    fn plain_body_is_used_as_fallback() {
        assert_eq!(
            status_error(502, " Bad Gateway \n"),
            ApiError::Status {
                status: 502,
                message: "Bad Gateway".into()
            }
        );
    }

    #[test]
    fn api_url_joins_configured_base() {
        assert_eq!(api_url("/channels"), "http://geek.itheima.net/v1_0/channels");
    }
}
