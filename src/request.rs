// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Request descriptions produced by the endpoint builders.
//!
//! A [`LlamaRequest`] is a plain value: which API subdomain to call, the
//! method, the path, the query pairs, an optional JSON body, and the
//! top-level response field to unwrap. Building one does no I/O; a client
//! turns it into exactly one HTTP exchange.
//!
//! Path and query values are inserted verbatim. Values that need escaping are
//! escaped by the [`encoding`](crate::encoding) helpers before they get here.

use std::fmt::{self, Display};

use serde_json::Value;
use url::Url;

use crate::config::{constants::base_urls, LlamaConfig};
use crate::errors::RequestError;

/// An API subdomain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// `api.llama.fi`: TVL, protocols, volumes, fees
    Tvl,
    /// `coins.llama.fi`: prices and blocks
    Coins,
    /// `yields.llama.fi`: pools
    Yields,
    /// `stablecoins.llama.fi`
    Stablecoins,
    /// `bridges.llama.fi`
    Bridges,
    /// `abi-decoder.llama.fi`
    AbiDecoder,
}

impl Service {
    /// Every service, in declaration order.
    pub const ALL: [Service; 6] = [
        Service::Tvl,
        Service::Coins,
        Service::Yields,
        Service::Stablecoins,
        Service::Bridges,
        Service::AbiDecoder,
    ];

    /// Public base URL of the service.
    pub fn default_base_url(self) -> &'static str {
        match self {
            Service::Tvl => base_urls::TVL,
            Service::Coins => base_urls::COINS,
            Service::Yields => base_urls::YIELDS,
            Service::Stablecoins => base_urls::STABLECOINS,
            Service::Bridges => base_urls::BRIDGES,
            Service::AbiDecoder => base_urls::ABI_DECODER,
        }
    }

    /// Short name for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Service::Tvl => "tvl",
            Service::Coins => "coins",
            Service::Yields => "yields",
            Service::Stablecoins => "stablecoins",
            Service::Bridges => "bridges",
            Service::AbiDecoder => "abi-decoder",
        }
    }
}

impl Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
        })
    }
}

/// A fully specified API call.
///
/// # Examples
///
/// ```
/// use defillama::{tvl, Service};
///
/// let request = tvl::charts(Some("Ethereum"));
/// assert_eq!(request.service(), Service::Tvl);
/// assert_eq!(request.path_and_query(), "/charts/Ethereum");
/// assert_eq!(
///     request.default_url().unwrap().as_str(),
///     "https://api.llama.fi/charts/Ethereum"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LlamaRequest {
    service: Service,
    method: Method,
    path: String,
    query: Vec<(&'static str, String)>,
    body: Option<Value>,
    unwrap: Option<&'static str>,
}

impl LlamaRequest {
    /// A GET request for `path` on `service`.
    pub fn get(service: Service, path: impl Into<String>) -> Self {
        Self {
            service,
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
            unwrap: None,
        }
    }

    /// A POST request for `path` on `service` with a JSON body.
    pub fn post(service: Service, path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            body: Some(body),
            ..Self::get(service, path)
        }
    }

    /// Append a query pair. Values keep their insertion order.
    #[must_use]
    pub fn query(mut self, key: &'static str, value: impl Display) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Append a query pair only when `value` is present.
    #[must_use]
    pub fn query_opt<V: Display>(self, key: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Return only this top-level field of the JSON response.
    #[must_use]
    pub fn unwrap_field(mut self, field: &'static str) -> Self {
        self.unwrap = Some(field);
        self
    }

    pub fn service(&self) -> Service {
        self.service
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_pairs(&self) -> &[(&'static str, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Field unwrapped from the response, if any.
    pub fn unwrap_key(&self) -> Option<&'static str> {
        self.unwrap
    }

    /// Path followed by `?key=value&...` when there is a query.
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }

    /// Absolute URL against the configured base URL of the service.
    pub fn url(&self, config: &LlamaConfig) -> Result<Url, RequestError> {
        let raw = format!("{}{}", config.get_base_url(self.service), self.path_and_query());
        Url::parse(&raw).map_err(|e| RequestError::invalid_url(raw, e))
    }

    /// Absolute URL against the public base URL of the service.
    pub fn default_url(&self) -> Result<Url, RequestError> {
        self.url(&LlamaConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LlamaConfigBuilder;
    use serde_json::json;

    #[test]
    fn test_path_without_query() {
        let request = LlamaRequest::get(Service::Tvl, "/chains");
        assert_eq!(request.path_and_query(), "/chains");
        assert_eq!(request.method(), Method::Get);
        assert!(request.body().is_none());
    }

    #[test]
    fn test_query_keeps_order() {
        let request = LlamaRequest::get(Service::Coins, "/chart/x")
            .query("start", 1)
            .query("span", 0)
            .query_opt::<u32>("missing", None)
            .query_opt("period", Some("24h"));

        assert_eq!(request.path_and_query(), "/chart/x?start=1&span=0&period=24h");
    }

    #[test]
    fn test_url_uses_configured_base() {
        let config = LlamaConfigBuilder::new()
            .base_url(Service::Yields, "http://127.0.0.1:4000")
            .build();
        let request = LlamaRequest::get(Service::Yields, "/pools").unwrap_field("data");

        assert_eq!(
            request.url(&config).unwrap().as_str(),
            "http://127.0.0.1:4000/pools"
        );
        assert_eq!(request.unwrap_key(), Some("data"));
    }

    #[test]
    fn test_url_keeps_encoded_query_verbatim() {
        let request = LlamaRequest::get(Service::Coins, "/batchHistorical")
            .query("coins", "%7B%22coingecko:ethereum%22:%5B1%5D%7D")
            .query("searchWidth", "6h");

        assert_eq!(
            request.default_url().unwrap().as_str(),
            "https://coins.llama.fi/batchHistorical?coins=%7B%22coingecko:ethereum%22:%5B1%5D%7D&searchWidth=6h"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = LlamaConfigBuilder::new()
            .base_url(Service::Tvl, "not a base")
            .build();
        let err = LlamaRequest::get(Service::Tvl, "/chains")
            .url(&config)
            .unwrap_err();

        assert!(matches!(err, RequestError::InvalidUrl { .. }));
    }

    #[test]
    fn test_post_carries_body() {
        let body = json!({"coins": ["coingecko:ethereum"]});
        let request = LlamaRequest::post(Service::Coins, "/prices", body.clone());

        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.body(), Some(&body));
    }

    #[test]
    fn test_service_display() {
        assert_eq!(Service::AbiDecoder.to_string(), "abi-decoder");
        assert_eq!(Method::Post.to_string(), "POST");
    }
}
