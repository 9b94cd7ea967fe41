// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! TVL endpoints on `api.llama.fi`.
//!
//! None of these unwrap the response: the API answers with the payload
//! itself.

use crate::request::{LlamaRequest, Service};

/// Current TVL of every chain, with CoinGecko/CMC ids and token symbols.
///
/// *Endpoint: GET /chains*
pub fn chains() -> LlamaRequest {
    LlamaRequest::get(Service::Tvl, "/chains")
}

/// All protocols with their TVL, or one protocol with its full history.
///
/// *Endpoints: GET /protocols, GET /protocol/{protocol}*
///
/// ```
/// use defillama::tvl;
///
/// assert_eq!(tvl::protocols(None).path(), "/protocols");
/// assert_eq!(tvl::protocols(Some("aave")).path(), "/protocol/aave");
/// ```
pub fn protocols(protocol: Option<&str>) -> LlamaRequest {
    match protocol {
        Some(slug) => LlamaRequest::get(Service::Tvl, format!("/protocol/{slug}")),
        None => LlamaRequest::get(Service::Tvl, "/protocols"),
    }
}

/// Historical TVL excluding liquid staking and double counting, for all
/// chains or one chain.
///
/// *Endpoints: GET /v2/historicalChainTvl, GET /v2/historicalChainTvl/{chain}*
pub fn historical_chains_tvl(chain: Option<&str>) -> LlamaRequest {
    match chain {
        Some(chain) => LlamaRequest::get(Service::Tvl, format!("/v2/historicalChainTvl/{chain}")),
        None => LlamaRequest::get(Service::Tvl, "/v2/historicalChainTvl"),
    }
}

/// Historical TVL of all chains combined or of one chain.
///
/// *Endpoints: GET /charts, GET /charts/{chain}*
pub fn charts(chain: Option<&str>) -> LlamaRequest {
    match chain {
        Some(chain) => LlamaRequest::get(Service::Tvl, format!("/charts/{chain}")),
        None => LlamaRequest::get(Service::Tvl, "/charts"),
    }
}

/// Current TVL of a protocol as a bare number.
///
/// *Endpoint: GET /tvl/{protocol}*
pub fn protocol_tvl(protocol: &str) -> LlamaRequest {
    LlamaRequest::get(Service::Tvl, format!("/tvl/{protocol}"))
}
