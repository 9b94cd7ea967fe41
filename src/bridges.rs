// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Bridge endpoints on `bridges.llama.fi`.
//!
//! Bridges are addressed by their numeric DefiLlama id; chains by their
//! DefiLlama name (`"Ethereum"`, `"Polygon"`, ...).

use crate::config::constants::{ALL_CHAINS, DEFAULT_TRANSACTION_LIMIT};
use crate::request::{LlamaRequest, Service};
use crate::types::coins::CoinId;
use crate::types::timestamp::UnixTimestamp;

/// All bridges with summaries of recent volume.
///
/// The response is unwrapped from its `bridges` envelope.
///
/// *Endpoint: GET /bridges*
pub fn bridges(include_chains: bool) -> LlamaRequest {
    LlamaRequest::get(Service::Bridges, "/bridges")
        .query("includeChains", include_chains)
        .unwrap_field("bridges")
}

/// Volume summary and chain breakdown of one bridge.
///
/// *Endpoint: GET /bridge/{id}*
pub fn bridge(id: u64) -> LlamaRequest {
    LlamaRequest::get(Service::Bridges, format!("/bridge/{id}"))
}

/// Historical deposit and withdrawal volume for a chain, or every chain when
/// `chain` is `None`, optionally restricted to one bridge.
///
/// *Endpoint: GET /bridgevolume/{chain}*
pub fn volume(chain: Option<&str>, id: Option<u64>) -> LlamaRequest {
    let chain = chain.unwrap_or(ALL_CHAINS);
    LlamaRequest::get(Service::Bridges, format!("/bridgevolume/{chain}")).query_opt("id", id)
}

/// 24 hour token and address breakdown for a chain on the day containing
/// `timestamp`.
///
/// With a bridge id the per-bridge endpoint is used instead.
///
/// *Endpoints: GET /bridgestats/{timestamp}/{chain},
/// GET /bridgedaystats/{timestamp}/{chain}?id={id}*
pub fn stats(timestamp: UnixTimestamp, chain: &str, id: Option<u64>) -> LlamaRequest {
    match id {
        Some(id) => LlamaRequest::get(
            Service::Bridges,
            format!("/bridgedaystats/{timestamp}/{chain}"),
        )
        .query("id", id),
        None => LlamaRequest::get(Service::Bridges, format!("/bridgestats/{timestamp}/{chain}")),
    }
}

/// Filter for [`transactions`].
///
/// ```
/// use defillama::{bridges::{self, TransactionsQuery}, CoinId, UnixTimestamp};
///
/// let query = TransactionsQuery::new(
///     "Ethereum",
///     CoinId::new("ethereum", "0x69b4b4390bd1f0ae84e090fe8af7aa2bc6a6a8b2"),
///     UnixTimestamp::new(1667260800),
///     UnixTimestamp::new(1667347200),
/// )
/// .limit(10);
///
/// assert_eq!(
///     bridges::transactions(1, &query).path_and_query(),
///     "/transactions/1?starttimestamp=1667260800&endtimestamp=1667347200\
///      &sourcechain=Ethereum&address=ethereum:0x69b4b4390bd1f0ae84e090fe8af7aa2bc6a6a8b2&limit=10"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionsQuery {
    source_chain: String,
    address: CoinId,
    start: UnixTimestamp,
    end: UnixTimestamp,
    limit: u32,
}

impl TransactionsQuery {
    /// Transactions bridging out of `source_chain` that involve `address`,
    /// between `start` and `end`.
    pub fn new(
        source_chain: impl Into<String>,
        address: CoinId,
        start: UnixTimestamp,
        end: UnixTimestamp,
    ) -> Self {
        Self {
            source_chain: source_chain.into(),
            address,
            start,
            end,
            limit: DEFAULT_TRANSACTION_LIMIT,
        }
    }

    /// Maximum number of transactions returned. Defaults to 100.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// Transactions of a bridge within a date range.
///
/// *Endpoint: GET /transactions/{id}*
pub fn transactions(id: u64, query: &TransactionsQuery) -> LlamaRequest {
    LlamaRequest::get(Service::Bridges, format!("/transactions/{id}"))
        .query("starttimestamp", query.start)
        .query("endtimestamp", query.end)
        .query("sourcechain", &query.source_chain)
        .query("address", &query.address)
        .query("limit", query.limit)
}
