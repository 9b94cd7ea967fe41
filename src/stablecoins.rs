// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Stablecoin endpoints on `stablecoins.llama.fi`.

use std::fmt;

use crate::request::{LlamaRequest, Service};

/// Whose stablecoin market cap a chart covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartScope<'a> {
    /// Every chain combined
    #[default]
    All,
    /// A single chain, by its DefiLlama name (e.g. `"Ethereum"`)
    Chain(&'a str),
}

impl fmt::Display for ChartScope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartScope::All => f.write_str("all"),
            ChartScope::Chain(chain) => f.write_str(chain),
        }
    }
}

/// All stablecoins with their circulating amounts.
///
/// The response is unwrapped from its `peggedAssets` envelope.
///
/// *Endpoint: GET /stablecoins*
pub fn stablecoins(include_prices: bool) -> LlamaRequest {
    LlamaRequest::get(Service::Stablecoins, "/stablecoins")
        .query("includePrices", include_prices)
        .unwrap_field("peggedAssets")
}

/// Historical market cap of all stablecoins, optionally restricted to one
/// stablecoin id.
///
/// *Endpoints: GET /stablecoincharts/all, GET /stablecoincharts/{chain}*
///
/// ```
/// use defillama::stablecoins::{self, ChartScope};
///
/// let request = stablecoins::charts(ChartScope::Chain("Ethereum"), Some(1));
/// assert_eq!(request.path_and_query(), "/stablecoincharts/Ethereum?stablecoin=1");
/// ```
pub fn charts(scope: ChartScope<'_>, stablecoin: Option<u64>) -> LlamaRequest {
    LlamaRequest::get(Service::Stablecoins, format!("/stablecoincharts/{scope}"))
        .query_opt("stablecoin", stablecoin)
}

/// Historical market cap and chain distribution of one stablecoin.
///
/// *Endpoint: GET /stablecoin/{id}*
pub fn distribution(stablecoin: u64) -> LlamaRequest {
    LlamaRequest::get(Service::Stablecoins, format!("/stablecoin/{stablecoin}"))
}

/// Current stablecoin market cap per chain.
///
/// *Endpoint: GET /stablecoinchains*
pub fn chains() -> LlamaRequest {
    LlamaRequest::get(Service::Stablecoins, "/stablecoinchains")
}

/// Historical stablecoin prices.
///
/// *Endpoint: GET /stablecoinprices*
pub fn prices() -> LlamaRequest {
    LlamaRequest::get(Service::Stablecoins, "/stablecoinprices")
}
