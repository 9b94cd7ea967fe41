// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Async client for the DefiLlama API.
//!
//! [`LlamaClient`] executes the [`LlamaRequest`] values produced by the
//! endpoint modules. Each call is exactly one HTTP exchange: no retries, no
//! caching, no rate limiting. The underlying connection pool is shared by
//! clones of the client and reused across calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use defillama::{tvl, LlamaClient};
//!
//! let client = LlamaClient::new()?;
//! let chains = client.send(&tvl::chains()).await?;
//! println!("{} chains tracked", chains.as_array().map_or(0, Vec::len));
//! ```

use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn, Instrument, Span};
use url::Url;

use crate::config::LlamaConfig;
use crate::errors::{HttpError, LlamaError};
use crate::request::{LlamaRequest, Method};
use crate::response::decode_body;
use crate::spans;

/// Async DefiLlama client.
#[derive(Debug, Clone)]
pub struct LlamaClient {
    http: reqwest::Client,
    config: Arc<LlamaConfig>,
}

impl LlamaClient {
    /// Client against the public API with the default configuration.
    pub fn new() -> Result<Self, HttpError> {
        Self::with_config(LlamaConfig::default())
    }

    /// Client with custom base URLs, user agent or timeout.
    pub fn with_config(config: LlamaConfig) -> Result<Self, HttpError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
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
    pub async fn send(&self, request: &LlamaRequest) -> Result<Value, LlamaError> {
        let url = request.url(&self.config)?;
        let span = spans::send_request(request.service(), request.method(), request.path());

        self.execute(request, url).instrument(span).await
    }

    /// Send a request and deserialize the result into `T`.
    ///
    /// ```rust,ignore
    /// use defillama::{coins, CoinId, CoinPrices};
    ///
    /// let prices: CoinPrices = client
    ///     .send_as(&coins::current_prices(&[CoinId::coingecko("ethereum")], None))
    ///     .await?;
    /// ```
    pub async fn send_as<T: DeserializeOwned>(&self, request: &LlamaRequest) -> Result<T, LlamaError> {
        let value = self.send(request).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// GET an absolute URL and decode the body as JSON.
    ///
    /// No base URL or unwrapping is applied.
    pub async fn get_json(&self, url: &str) -> Result<Value, HttpError> {
        let span = spans::get_json(url);

        async move {
            let start = Instant::now();
            debug!(url = %url, "DefiLlama request");

            let response = match self.http.get(url).send().await {
                Ok(response) => response,
                Err(e) => {
                    warn!(
                        error = %e,
                        duration_ms = %start.elapsed().as_millis(),
                        "DefiLlama request failed"
                    );
                    return Err(HttpError::transport(url, e));
                }
            };
            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(|e| HttpError::transport(url, e))?;
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
        .instrument(span)
        .await
    }

    async fn execute(&self, request: &LlamaRequest, url: Url) -> Result<Value, LlamaError> {
        let start = Instant::now();
        debug!(url = %url, "DefiLlama request");

        let builder = match request.method() {
            Method::Get => self.http.get(url.clone()),
            Method::Post => {
                let builder = self.http.post(url.clone());
                match request.body() {
                    Some(body) => builder.json(body),
                    None => builder,
                }
            }
        };

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    error = %e,
                    duration_ms = %start.elapsed().as_millis(),
                    "DefiLlama request failed"
                );
                return Err(HttpError::transport(url.as_str(), e).into());
            }
        };

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::transport(url.as_str(), e))?;
        let duration = start.elapsed();

        Span::current().record("status", status);
        Span::current().record("duration_ms", duration.as_millis() as u64);

        match decode_body(url.as_str(), status, &body, request.unwrap_key()) {
            Ok(value) => {
                debug!(status, duration_ms = %duration.as_millis(), "DefiLlama response");
                Ok(value)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    status,
                    duration_ms = %duration.as_millis(),
                    "DefiLlama response rejected"
                );
                Err(e.into())
            }
        }
    }
}
