//! Blocking client for the DefiLlama API.
//!
//! Same surface as [`crate::LlamaClient`] without an async runtime. Must not
//! be used from inside a tokio runtime.
//!
//! ```rust,ignore
//! use defillama::{blocking::LlamaClient, yields};
//!
//! let client = LlamaClient::new()?;
//! let pools = client.send(&yields::pools())?;
//! ```

use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn, Span};

use crate::config::LlamaConfig;
use crate::errors::{HttpError, LlamaError};
use crate::request::{LlamaRequest, Method};
use crate::response::decode_body;
use crate::spans;

/// Blocking DefiLlama client.
#[derive(Debug, Clone)]
pub struct LlamaClient {
    http: reqwest::blocking::Client,
    config: Arc<LlamaConfig>,
}

impl LlamaClient {
    /// Client against the public API with the default configuration.
    pub fn new() -> Result<Self, HttpError> {
        Self::with_config(LlamaConfig::default())
    }

    /// Client with custom base URLs, user agent or timeout.
    pub fn with_config(config: LlamaConfig) -> Result<Self, HttpError> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(HttpError::client)?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// Configuration this client was built with.
    pub fn config(&self) -> &LlamaConfig {
        &self.config
    }

    /// Send a request and return its decoded, possibly unwrapped, JSON.
    pub fn send(&self, request: &LlamaRequest) -> Result<Value, LlamaError> {
        let url = request.url(&self.config)?;
        let span = spans::send_request(request.service(), request.method(), request.path());
        let _guard = span.enter();

        let start = Instant::now();
        debug!(url = %url, "DefiLlama request");

        let builder = match (request.method(), request.body()) {
            (Method::Post, Some(body)) => self.http.post(url.clone()).json(body),
            (Method::Post, None) => self.http.post(url.clone()),
            (Method::Get, _) => self.http.get(url.clone()),
        };

        let response = builder.send().map_err(|e| {
            warn!(error = %e, "DefiLlama request failed");
            HttpError::transport(url.as_str(), e)
        })?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| HttpError::transport(url.as_str(), e))?;
        let duration = start.elapsed();

        Span::current().record("status", status);
        Span::current().record("duration_ms", duration.as_millis() as u64);

        let value = decode_body(url.as_str(), status, &body, request.unwrap_key()).map_err(|e| {
            warn!(error = %e, status, "DefiLlama response rejected");
            e
        })?;
        debug!(status, duration_ms = %duration.as_millis(), "DefiLlama response");

        Ok(value)
    }

    /// Send a request and deserialize the result into `T`.
    pub fn send_as<T: DeserializeOwned>(&self, request: &LlamaRequest) -> Result<T, LlamaError> {
        let value = self.send(request)?;
        Ok(serde_json::from_value(value)?)
    }

    /// GET an absolute URL and decode the body as JSON.
    pub fn get_json(&self, url: &str) -> Result<Value, HttpError> {
        let span = spans::get_json(url);
        let _guard = span.enter();

        let start = Instant::now();
        debug!(url = %url, "DefiLlama request");

        let response = self.http.get(url).send().map_err(|e| {
            warn!(error = %e, "DefiLlama request failed");
            HttpError::transport(url, e)
        })?;
        let status = response.status().as_u16();
        let body = response.bytes().map_err(|e| HttpError::transport(url, e))?;
        let duration = start.elapsed();

        Span::current().record("status", status);
        Span::current().record("duration_ms", duration.as_millis() as u64);

        let value = decode_body(url, status, &body, None).map_err(|e| {
            warn!(error = %e, status, "DefiLlama response rejected");
            e
        })?;
        debug!(status, duration_ms = %duration.as_millis(), "DefiLlama response");

        Ok(value)
    }
}
