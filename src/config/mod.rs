//! Configuration for the DefiLlama client
//!
//! This module controls where requests go and how they are sent: the base
//! URL of every API subdomain, the user agent, and an optional timeout.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use defillama::LlamaConfig;
//!
//! // Public endpoints, browser user agent, no timeout
//! let config = LlamaConfig::default();
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use defillama::{LlamaConfigBuilder, Service};
//! use std::time::Duration;
//!
//! let config = LlamaConfigBuilder::new()
//!     .base_url(Service::Coins, "https://coins.example.org")
//!     .timeout(Duration::from_secs(20))
//!     .build();
//!
//! assert_eq!(config.get_base_url(Service::Coins), "https://coins.example.org");
//! ```
//!
//! # Example: Everything behind one host
//!
//! ```rust
//! use defillama::{LlamaConfigBuilder, Service};
//!
//! // Useful for a local mock server or a caching proxy
//! let config = LlamaConfigBuilder::new()
//!     .all_base_urls("http://127.0.0.1:8080")
//!     .build();
//!
//! assert_eq!(config.get_base_url(Service::Yields), "http://127.0.0.1:8080");
//! ```

use std::collections::HashMap;
use std::time::Duration;

use crate::request::Service;

pub mod constants;

/// Configuration for DefiLlama requests
///
/// Use [`LlamaConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct LlamaConfig {
    /// Per-service base URL overrides
    /// Default: empty (every service uses its public URL)
    pub base_url_overrides: HashMap<Service, String>,

    /// User agent sent with every request
    /// Default: [`constants::USER_AGENT`]
    pub user_agent: String,

    /// Timeout for a whole request, connect to last body byte
    /// Default: None (wait for as long as the server takes)
    pub timeout: Option<Duration>,
}

impl Default for LlamaConfig {
    fn default() -> Self {
        Self {
            base_url_overrides: HashMap::new(),
            user_agent: constants::USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl LlamaConfig {
    /// Get the effective base URL for a service
    ///
    /// Returns the override if set, otherwise the public URL.
    ///
    /// # Example
    ///
    /// ```rust
    /// use defillama::{LlamaConfig, Service};
    ///
    /// let mut config = LlamaConfig::default();
    /// config.set_base_url(Service::Bridges, "http://localhost:3000");
    ///
    /// assert_eq!(config.get_base_url(Service::Bridges), "http://localhost:3000");
    /// assert_eq!(config.get_base_url(Service::Tvl), "https://api.llama.fi");
    /// ```
    pub fn get_base_url(&self, service: Service) -> &str {
        self.base_url_overrides
            .get(&service)
            .map(String::as_str)
            .unwrap_or_else(|| service.default_base_url())
    }

    /// Override the base URL of a service
    ///
    /// A trailing slash is dropped so paths join cleanly.
    pub fn set_base_url(&mut self, service: Service, url: impl Into<String>) {
        let mut url = url.into();
        while url.ends_with('/') {
            url.pop();
        }
        self.base_url_overrides.insert(service, url);
    }
}

/// Builder for [`LlamaConfig`]
///
/// # Example
///
/// ```rust
/// use defillama::{LlamaConfigBuilder, Service};
///
/// let config = LlamaConfigBuilder::new()
///     .base_url(Service::Tvl, "https://api.example.org")
///     .user_agent("my-dashboard/1.0")
///     .build();
///
/// assert_eq!(config.user_agent, "my-dashboard/1.0");
/// ```
#[derive(Debug, Default)]
pub struct LlamaConfigBuilder {
    config: LlamaConfig,
}

impl LlamaConfigBuilder {
    /// Create a new builder starting from the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the base URL of one service
    pub fn base_url(mut self, service: Service, url: impl Into<String>) -> Self {
        self.config.set_base_url(service, url);
        self
    }

    /// Point every service at the same base URL
    pub fn all_base_urls(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        for service in Service::ALL {
            self.config.set_base_url(service, url.clone());
        }
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set a timeout for each request
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Build the configuration
    pub fn build(self) -> LlamaConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LlamaConfig::default();
        assert!(config.base_url_overrides.is_empty());
        assert_eq!(config.user_agent, constants::USER_AGENT);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_defaults_per_service() {
        let config = LlamaConfig::default();
        assert_eq!(config.get_base_url(Service::Tvl), constants::base_urls::TVL);
        assert_eq!(config.get_base_url(Service::Coins), constants::base_urls::COINS);
        assert_eq!(config.get_base_url(Service::Yields), constants::base_urls::YIELDS);
        assert_eq!(
            config.get_base_url(Service::Stablecoins),
            constants::base_urls::STABLECOINS
        );
        assert_eq!(config.get_base_url(Service::Bridges), constants::base_urls::BRIDGES);
        assert_eq!(
            config.get_base_url(Service::AbiDecoder),
            constants::base_urls::ABI_DECODER
        );
    }

    #[test]
    fn test_override_only_affects_one_service() {
        let config = LlamaConfigBuilder::new()
            .base_url(Service::Coins, "http://localhost:9000/")
            .build();

        assert_eq!(config.get_base_url(Service::Coins), "http://localhost:9000");
        assert_eq!(config.get_base_url(Service::Tvl), constants::base_urls::TVL);
    }

    #[test]
    fn test_all_base_urls() {
        let config = LlamaConfigBuilder::new()
            .all_base_urls("http://127.0.0.1:1234")
            .build();

        for service in Service::ALL {
            assert_eq!(config.get_base_url(service), "http://127.0.0.1:1234");
        }
    }

    #[test]
    fn test_later_override_wins() {
        let config = LlamaConfigBuilder::new()
            .all_base_urls("http://a")
            .base_url(Service::Yields, "http://b")
            .build();

        assert_eq!(config.get_base_url(Service::Yields), "http://b");
        assert_eq!(config.get_base_url(Service::Bridges), "http://a");
    }

    #[test]
    fn test_timeout() {
        let config = LlamaConfigBuilder::new()
            .timeout(Duration::from_secs(5))
            .build();
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
