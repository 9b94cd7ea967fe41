// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Coin identifiers as understood by the coins API.
//!
//! The API addresses a token as `{chain}:{address}` (for example
//! `ethereum:0xdF574c24545E5FfEcb9a659c229253D4111d87e1`) or by a CoinGecko id
//! (`coingecko:ethereum`). Neither half is validated here; the API is the
//! source of truth for which chains and addresses exist.

use std::fmt;

use alloy_chains::NamedChain;
use alloy_primitives::Address;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use super::timestamp::UnixTimestamp;

/// Source prefix for tokens identified by their CoinGecko id.
pub const COINGECKO: &str = "coingecko";

/// A single token reference: a chain (or price source) and an address (or id).
///
/// Serializes as a single-entry map `{source: address}`, the shape the API
/// accepts for list-of-coins arguments.
///
/// # Examples
///
/// ```
/// use defillama::CoinId;
///
/// let coin = CoinId::new("ethereum", "0xdF574c24545E5FfEcb9a659c229253D4111d87e1");
/// assert_eq!(coin.to_string(), "ethereum:0xdF574c24545E5FfEcb9a659c229253D4111d87e1");
///
/// let gecko = CoinId::coingecko("bitcoin");
/// assert_eq!(gecko.to_string(), "coingecko:bitcoin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoinId {
    source: String,
    address: String,
}

impl CoinId {
    /// Create a coin id from a chain slug (or price source) and an address.
    pub fn new(source: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            address: address.into(),
        }
    }

    /// Create a coin id for a token listed on CoinGecko.
    pub fn coingecko(id: impl Into<String>) -> Self {
        Self::new(COINGECKO, id)
    }

    /// Create a coin id for an EVM token contract.
    ///
    /// Returns `None` when the chain has no known DefiLlama slug; use
    /// [`CoinId::new`] with the slug directly in that case.
    ///
    /// ```
    /// use alloy_chains::NamedChain;
    /// use alloy_primitives::address;
    /// use defillama::CoinId;
    ///
    /// let usdc = CoinId::evm(
    ///     NamedChain::Arbitrum,
    ///     address!("af88d065e77c8cc2239327c5edb3a432268e5831"),
    /// )
    /// .unwrap();
    /// assert_eq!(usdc.source(), "arbitrum");
    /// ```
    pub fn evm(chain: NamedChain, address: Address) -> Option<Self> {
        llama_chain_slug(chain).map(|slug| Self::new(slug, address.to_string()))
    }

    /// Chain slug or price source, the part before the `:`.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Token address or id, the part after the `:`.
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for CoinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.address)
    }
}

impl<S: Into<String>, A: Into<String>> From<(S, A)> for CoinId {
    fn from((source, address): (S, A)) -> Self {
        Self::new(source, address)
    }
}

impl Serialize for CoinId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.source, &self.address)?;
        map.end()
    }
}

/// Map an alloy [`NamedChain`] to the slug DefiLlama uses in coin ids.
///
/// Only chains whose slug is known are mapped; everything else yields `None`.
pub fn llama_chain_slug(chain: NamedChain) -> Option<&'static str> {
    let slug = match chain {
        NamedChain::Mainnet => "ethereum",
        NamedChain::Arbitrum => "arbitrum",
        NamedChain::Optimism => "optimism",
        NamedChain::Base => "base",
        NamedChain::Polygon => "polygon",
        NamedChain::BinanceSmartChain => "bsc",
        NamedChain::Avalanche => "avax",
        NamedChain::Fantom => "fantom",
        NamedChain::Gnosis => "xdai",
        NamedChain::Linea => "linea",
        NamedChain::Scroll => "scroll",
        NamedChain::Sonic => "sonic",
        NamedChain::Blast => "blast",
        NamedChain::Celo => "celo",
        _ => return None,
    };
    Some(slug)
}

/// Coins paired with the timestamps to price them at, for batch lookups.
///
/// Keys keep the order in which coins were first added. Adding the same coin
/// twice extends its timestamp list.
///
/// ```
/// use defillama::{BatchCoins, CoinId, UnixTimestamp};
///
/// let mut batch = BatchCoins::new();
/// batch.push(&CoinId::coingecko("ethereum"), [UnixTimestamp::new(1666876743)]);
/// batch.push(&CoinId::new("avax", "0xb97ef9ef8734c71904d8002f8b6bc66dd9c48a6e"), []);
///
/// assert_eq!(batch.len(), 2);
/// assert_eq!(
///     batch.to_value().to_string(),
///     r#"{"coingecko:ethereum":[1666876743],"avax:0xb97ef9ef8734c71904d8002f8b6bc66dd9c48a6e":[]}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchCoins {
    entries: Vec<(String, Vec<UnixTimestamp>)>,
}

impl BatchCoins {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add timestamps for a coin.
    pub fn push(&mut self, coin: &CoinId, timestamps: impl IntoIterator<Item = UnixTimestamp>) {
        let key = coin.to_string();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => existing.extend(timestamps),
            None => self.entries.push((key, timestamps.into_iter().collect())),
        }
    }

    /// Builder-style variant of [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, coin: &CoinId, timestamps: impl IntoIterator<Item = UnixTimestamp>) -> Self {
        self.push(coin, timestamps);
        self
    }

    /// Number of distinct coins in the batch.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(coin key, timestamps)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[UnixTimestamp])> {
        self.entries.iter().map(|(k, ts)| (k.as_str(), ts.as_slice()))
    }

    /// JSON object form, `{"chain:address": [ts, ...], ...}`, keys in insertion order.
    pub fn to_value(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(key, timestamps)| {
                let list = timestamps.iter().map(|ts| Value::from(ts.as_secs())).collect();
                (key.clone(), Value::Array(list))
            })
            .collect();
        Value::Object(map)
    }
}

impl Serialize for BatchCoins {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, timestamps) in &self.entries {
            map.serialize_entry(key, timestamps)?;
        }
        map.end()
    }
}
