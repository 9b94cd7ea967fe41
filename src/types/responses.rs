// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Typed views over common API responses.
//!
//! Every client call returns a [`serde_json::Value`]; these structs are an
//! optional layer for use with `send_as`. Only stable, documented fields are
//! modeled. Everything else, including fields whose meaning the API does not
//! document (`module`, `outlier`, `apyBaseInception`, ...), is kept verbatim
//! in each struct's `extra` map.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Price entry keyed by coin id in the `coins` envelope of price endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinPrice {
    pub price: f64,
    #[serde(default)]
    pub symbol: Option<String>,
    pub timestamp: i64,
    /// Liquidity depth behind the price, 0 to 1
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub decimals: Option<u8>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Unwrapped response of the current, historical and first price endpoints.
pub type CoinPrices = HashMap<String, CoinPrice>;

/// A single price observation inside a chart or batch response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: i64,
    pub price: f64,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Price series for one coin, as returned by the chart and batch endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub decimals: Option<u8>,
    pub prices: Vec<PricePoint>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Block closest to a requested timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearestBlock {
    pub height: u64,
    pub timestamp: i64,
}

/// Entry of the chains listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainTvl {
    pub name: String,
    pub tvl: f64,
    #[serde(default, rename = "gecko_id")]
    pub gecko_id: Option<String>,
    #[serde(default)]
    pub token_symbol: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A dated TVL observation.
///
/// The historical endpoints send `date` as a number, the legacy chart
/// endpoints as a numeric string; both decode here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TvlPoint {
    #[serde(deserialize_with = "int_or_string")]
    pub date: i64,
    #[serde(alias = "totalLiquidityUSD")]
    pub tvl: f64,
}

/// Yield pool as listed by the pools endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    pub pool: String,
    pub chain: String,
    pub project: String,
    pub symbol: String,
    pub tvl_usd: f64,
    #[serde(default)]
    pub apy: Option<f64>,
    #[serde(default)]
    pub apy_base: Option<f64>,
    #[serde(default)]
    pub apy_reward: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Point of a pool's APY/TVL history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolChartPoint {
    pub timestamp: String,
    pub tvl_usd: f64,
    #[serde(default)]
    pub apy: Option<f64>,
    #[serde(default)]
    pub apy_base: Option<f64>,
    #[serde(default)]
    pub apy_reward: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn int_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(v) => Ok(v),
        Raw::Str(s) => s.parse().map_err(serde::de::Error::custom),
    }
}
