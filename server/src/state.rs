//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled `reqwest::Client` for the API proxy and the upstream base
//! URL. The client carries the proxy timeout so every forwarded request is
//! bounded the same way.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Clone is required by Axum; the client is internally reference counted.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub upstream: Arc<str>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns the builder error if the TLS backend cannot be initialized.
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.proxy_timeout).build()?;
        Ok(Self { http, upstream: Arc::from(config.upstream.as_str()) })
    }
}
