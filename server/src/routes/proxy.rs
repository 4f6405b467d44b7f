//! `/api/*` pass-through to the upstream ERP service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host, so the ERP API needs no CORS
//! configuration. Requests are forwarded with their method, query string,
//! body, and the headers the API cares about; the upstream status and body
//! come back untouched. Failures that never reach the upstream are reported
//! as JSON error bodies in the upstream's own shape.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::state::AppState;

/// Request headers copied to the upstream call.
pub const FORWARDED_HEADERS: [header::HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream timed out")]
    Timeout { path: String },
    #[error("upstream unreachable: {reason}")]
    Unreachable { path: String, reason: String },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    status: u16,
    message: &'a str,
    error_code: &'a str,
    path: &'a str,
}

impl ProxyError {
    fn from_reqwest(err: &reqwest::Error, path: &str) -> Self {
        if err.is_timeout() {
            Self::Timeout { path: path.to_owned() }
        } else {
            Self::Unreachable { path: path.to_owned(), reason: err.to_string() }
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            Self::Unreachable { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, error_code, path) = match &self {
            Self::Timeout { path } => ("The ERP service did not respond in time", "UPSTREAM_TIMEOUT", path),
            Self::Unreachable { path, .. } => ("The ERP service is unavailable", "UPSTREAM_UNAVAILABLE", path),
        };
        let body = ErrorBody { status: status.as_u16(), message, error_code, path };
        (status, axum::Json(body)).into_response()
    }
}

/// Upstream URL for a request under `/api`, keeping the query string.
#[must_use]
pub fn upstream_url(upstream: &str, uri: &Uri) -> String {
    let path = uri.path().strip_prefix("/api").unwrap_or(uri.path());
    match uri.query() {
        Some(query) => format!("{upstream}{path}?{query}"),
        None => format!("{upstream}{path}"),
    }
}

/// Forward one API request.
///
/// # Errors
///
/// Returns [`ProxyError`] when the upstream cannot be reached or times out.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.upstream, &uri);
    let path = uri.path().to_owned();

    let mut request = state.http.request(method.clone(), &url);
    for name in &FORWARDED_HEADERS {
        if let Some(value) = headers.get(name) {
            request = request.header(name, value);
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|e| {
        tracing::warn!(%method, %path, error = %e, "proxy request failed");
        ProxyError::from_reqwest(&e, &path)
    })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(|e| ProxyError::from_reqwest(&e, &path))?;
    tracing::debug!(%method, %path, status = status.as_u16(), "proxied");

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    } else {
        response.headers_mut().remove(header::CONTENT_TYPE);
    }
    Ok(response)
}

/// Liveness check; does not touch the upstream.
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))])
}
