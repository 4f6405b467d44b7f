//! REST transport for the ERP API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, raced against a
//! `gloo-timers` timeout.
//! Server-side (SSR): every call resolves to [`ApiError::Unavailable`] since
//! data is only fetched in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Response classification lives in [`decode_response`], a pure function over
//! `(status, body)`, so envelope handling is testable without a browser. A 401
//! on a session-bound call clears the stored session and sends the browser to
//! `/login`; the error still propagates so callers stop their spinners.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::endpoints::ApiCall;
#[cfg(feature = "hydrate")]
use super::endpoints::Method;
use super::types::{ApiEnvelope, ErrorBody};
use crate::state::auth::{TOKEN_KEY, USER_KEY};

/// Path prefix for every API request.
pub const API_BASE: &str = "/api";
/// Per-request timeout, covering the response body as well as the headers.
pub const REQUEST_TIMEOUT_MS: u32 = 30_000;
/// Where a rejected session sends the browser.
pub const LOGIN_PATH: &str = "/login";

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("session expired")]
    Unauthorized,
    #[error("request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message suitable for a toast: the server's message when it sent one,
    /// otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Http { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }

    /// Whether a single retry is worthwhile.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout => true,
            Self::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[must_use]
pub fn request_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Classify a response and unwrap its payload.
///
/// 2xx bodies are read as `ApiEnvelope<T>`; endpoints that answer with a bare
/// payload are accepted too. Everything else becomes an [`ApiError`] carrying
/// the server's `message` when the body has one.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] for 401, [`ApiError::Http`] for other
/// non-2xx statuses or `success: false` envelopes, and [`ApiError::Decode`]
/// when the body matches neither shape.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str, session_bound: bool) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        if let Ok(envelope) = serde_json::from_str::<ApiEnvelope<T>>(body) {
            if !envelope.success {
                return Err(ApiError::Http { status, message: envelope.message.unwrap_or_default() });
            }
            return Ok(envelope.data);
        }
        if let Ok(payload) = serde_json::from_str::<T>(body) {
            return Ok(payload);
        }
        // Empty-bodied successes (e.g. 204) for unit-like payloads.
        if body.trim().is_empty() {
            if let Ok(payload) = serde_json::from_str::<T>("null") {
                return Ok(payload);
            }
        }
        return Err(ApiError::Decode(format!("status {status}: body did not match expected shape")));
    }

    if status == 401 && session_bound {
        return Err(ApiError::Unauthorized);
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|err| err.message)
        .unwrap_or_default();
    Err(ApiError::Http { status, message })
}

/// Send `call` once.
///
/// # Errors
///
/// See [`decode_response`]; transport failures map to `Network`/`Timeout`.
pub async fn send<T: DeserializeOwned>(call: &ApiCall<T>) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result = send_browser(call).await;
        if matches!(result, Err(ApiError::Unauthorized)) {
            on_unauthorized(crate::util::storage::remove, |path| {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(path);
                }
            });
        }
        if let Err(err) = &result {
            log::warn!("{:?} {} failed: {err}", call.method, call.path);
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = call;
        Err(ApiError::Unavailable)
    }
}

/// Drop both persisted session keys, then navigate to [`LOGIN_PATH`].
pub fn on_unauthorized(mut remove: impl FnMut(&str), navigate: impl FnOnce(&str)) {
    remove(TOKEN_KEY);
    remove(USER_KEY);
    navigate(LOGIN_PATH);
}

/// Send `call`, retrying once when the first failure is transient.
///
/// # Errors
///
/// Returns the error of the last attempt.
pub async fn fetch<T: DeserializeOwned>(call: ApiCall<T>) -> Result<T, ApiError> {
    match send(&call).await {
        Err(err) if err.is_transient() => send(&call).await,
        other => other,
    }
}

/// Send a mutation once; mutations are never retried.
///
/// # Errors
///
/// See [`send`].
pub async fn mutate<T: DeserializeOwned>(call: ApiCall<T>) -> Result<T, ApiError> {
    send(&call).await
}

/// Race a whole request/response exchange against `timer`.
///
/// # Errors
///
/// [`ApiError::Timeout`] when `timer` fires first, otherwise the exchange's
/// own error.
#[cfg(any(feature = "hydrate", test))]
pub async fn with_timeout<T, F, D>(exchange: F, timer: D) -> Result<T, ApiError>
where
    F: std::future::Future<Output = Result<T, ApiError>>,
    D: std::future::Future<Output = ()>,
{
    use futures::future::{Either, select};

    match select(Box::pin(exchange), Box::pin(timer)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}

#[cfg(feature = "hydrate")]
async fn send_browser<T: DeserializeOwned>(call: &ApiCall<T>) -> Result<T, ApiError> {
    use gloo_net::http::{Request, RequestBuilder};

    let url = request_url(&call.path);
    let mut builder: RequestBuilder = match call.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    };
    builder = builder.header("Accept", "application/json");
    if let Some(token) = crate::state::auth::stored_token() {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }
    let request = match &call.body {
        Some(body) => builder.json(body).map_err(|e| ApiError::Network(e.to_string()))?,
        None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
    };

    let exchange = async move {
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok((status, body))
    };
    let timer = gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    let (status, body) = with_timeout(exchange, timer).await?;
    decode_response(status, &body, call.session_bound)
}
