// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Price and block endpoints on `coins.llama.fi`.
//!
//! Coins are addressed as `{chain}:{address}` or `coingecko:{id}` (see
//! [`CoinId`]). Price endpoints unwrap the `coins` envelope, so the response
//! is a map from coin id to price data.
//!
//! Search widths and periods use chart notation: `W` week, `D` day, `H` hour,
//! `M` minute, case-insensitive (e.g. `"6h"`, `"2d"`).
//!
//! # Example
//!
//! ```rust,ignore
//! use defillama::{coins, CoinId, CoinPrices, LlamaClient};
//!
//! let client = LlamaClient::new()?;
//! let tokens = [
//!     CoinId::new("ethereum", "0xdF574c24545E5FfEcb9a659c229253D4111d87e1"),
//!     CoinId::coingecko("ethereum"),
//! ];
//! let prices: CoinPrices = client.send_as(&coins::current_prices(&tokens, None)).await?;
//! ```

use serde_json::Value;

use crate::config::constants::{DEFAULT_CHART_SEARCH_WIDTH, DEFAULT_PERIOD, DEFAULT_SEARCH_WIDTH};
use crate::encoding::{encode_json, encode_normal};
use crate::errors::RequestError;
use crate::request::{LlamaRequest, Service};
use crate::types::coins::{BatchCoins, CoinId};
use crate::types::timestamp::UnixTimestamp;

const COINS_FIELD: &str = "coins";

/// Current prices of tokens.
///
/// `search_width` defaults to `6h`.
///
/// *Endpoint: GET /prices/current/{coins}*
pub fn current_prices(coins: &[CoinId], search_width: Option<&str>) -> LlamaRequest {
    LlamaRequest::get(
        Service::Coins,
        format!("/prices/current/{}", encode_normal(coins)),
    )
    .query("searchWidth", search_width.unwrap_or(DEFAULT_SEARCH_WIDTH))
    .unwrap_field(COINS_FIELD)
}

/// Prices of tokens at a point in time.
///
/// `timestamp` defaults to the moment this function is called;
/// `search_width` defaults to `6h`.
///
/// *Endpoint: GET /prices/historical/{timestamp}/{coins}*
pub fn historical_prices(
    coins: &[CoinId],
    timestamp: Option<UnixTimestamp>,
    search_width: Option<&str>,
) -> LlamaRequest {
    let timestamp = timestamp.unwrap_or_else(UnixTimestamp::now);
    LlamaRequest::get(
        Service::Coins,
        format!("/prices/historical/{timestamp}/{}", encode_normal(coins)),
    )
    .query("searchWidth", search_width.unwrap_or(DEFAULT_SEARCH_WIDTH))
    .unwrap_field(COINS_FIELD)
}

/// Prices of several tokens, each at its own list of timestamps.
///
/// *Endpoint: GET /batchHistorical?coins={json}*
///
/// ```
/// use defillama::{coins, BatchCoins, CoinId, UnixTimestamp};
///
/// let batch = BatchCoins::new()
///     .with(&CoinId::coingecko("ethereum"), [UnixTimestamp::new(1666876743)]);
/// let request = coins::historical_batch(&batch, None);
///
/// assert_eq!(
///     request.path_and_query(),
///     "/batchHistorical?coins=%7B%22coingecko:ethereum%22:%5B1666876743%5D%7D&searchWidth=6h"
/// );
/// ```
pub fn historical_batch(batch: &BatchCoins, search_width: Option<&str>) -> LlamaRequest {
    LlamaRequest::get(Service::Coins, "/batchHistorical")
        .query("coins", encode_json(&batch.to_value()))
        .query("searchWidth", search_width.unwrap_or(DEFAULT_SEARCH_WIDTH))
        .unwrap_field(COINS_FIELD)
}

/// Options for [`chart`].
///
/// `start` and `end` are mutually exclusive. With neither set the chart ends
/// at the moment the request is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    start: Option<UnixTimestamp>,
    end: Option<UnixTimestamp>,
    span: u32,
    period: String,
    search_width: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            span: 0,
            period: DEFAULT_PERIOD.to_string(),
            search_width: DEFAULT_CHART_SEARCH_WIDTH.to_string(),
        }
    }
}

impl ChartOptions {
    /// Timestamp of the earliest data point.
    #[must_use]
    pub fn start(mut self, start: UnixTimestamp) -> Self {
        self.start = Some(start);
        self
    }

    /// Timestamp of the latest data point.
    #[must_use]
    pub fn end(mut self, end: UnixTimestamp) -> Self {
        self.end = Some(end);
        self
    }

    /// Number of data points returned.
    #[must_use]
    pub fn span(mut self, span: u32) -> Self {
        self.span = span;
        self
    }

    /// Duration between data points.
    #[must_use]
    pub fn period(mut self, period: impl Into<String>) -> Self {
        self.period = period.into();
        self
    }

    /// Time window on either side of each point to look for a price.
    #[must_use]
    pub fn search_width(mut self, search_width: impl Into<String>) -> Self {
        self.search_width = search_width.into();
        self
    }
}

/// Token prices at regular intervals.
///
/// Fails with [`RequestError::ConflictingArguments`] when both `start` and
/// `end` are set; nothing is sent in that case.
///
/// *Endpoint: GET /chart/{coins}*
pub fn chart(coins: &[CoinId], options: ChartOptions) -> Result<LlamaRequest, RequestError> {
    let request = LlamaRequest::get(Service::Coins, format!("/chart/{}", encode_normal(coins)));

    let request = match (options.start, options.end) {
        (Some(_), Some(_)) => return Err(RequestError::conflicting_arguments("start", "end")),
        (Some(start), None) => request.query("start", start),
        (None, end) => request.query("end", end.unwrap_or_else(UnixTimestamp::now)),
    };

    Ok(request
        .query("span", options.span)
        .query("period", options.period)
        .query("searchWidth", options.search_width)
        .unwrap_field(COINS_FIELD))
}

/// Percentage change of token prices over a period.
///
/// `timestamp` defaults to now; `look_forward` selects the period after the
/// timestamp instead of before; `period` defaults to `24h`.
///
/// *Endpoint: GET /percentage/{coins}*
pub fn percentage(
    coins: &[CoinId],
    timestamp: Option<UnixTimestamp>,
    look_forward: bool,
    period: Option<&str>,
) -> LlamaRequest {
    LlamaRequest::get(Service::Coins, format!("/percentage/{}", encode_normal(coins)))
        .query("timestamp", timestamp.unwrap_or_else(UnixTimestamp::now))
        .query("lookForward", look_forward)
        .query("period", period.unwrap_or(DEFAULT_PERIOD))
        .unwrap_field(COINS_FIELD)
}

/// Earliest recorded price of tokens.
///
/// *Endpoint: GET /prices/first/{coins}*
pub fn first_prices(coins: &[CoinId]) -> LlamaRequest {
    LlamaRequest::get(
        Service::Coins,
        format!("/prices/first/{}", encode_normal(coins)),
    )
    .unwrap_field(COINS_FIELD)
}

/// Block closest to a timestamp, as `{height, timestamp}`.
///
/// *Endpoint: GET /block/{chain}/{timestamp}*
pub fn nearest_block(chain: &str, timestamp: UnixTimestamp) -> LlamaRequest {
    LlamaRequest::get(Service::Coins, format!("/block/{chain}/{timestamp}"))
}

/// Prices for a JSON body of coins, returned as sent by the API.
///
/// *Endpoint: POST /prices*
pub fn post_prices(body: Value) -> LlamaRequest {
    LlamaRequest::post(Service::Coins, "/prices", body)
}
