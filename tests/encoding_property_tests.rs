// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for argument encoding and request building
//!
//! These tests use proptest to validate invariants of the encoders and the
//! builders that feed them, across arbitrary coin lists and options.

use defillama::encoding::{encode_json, encode_list, encode_normal};
use defillama::{coins, BatchCoins, ChartOptions, CoinId, LlamaConfigBuilder, RequestError, Service, UnixTimestamp};
use proptest::prelude::*;
use serde_json::Value;

// Helper to generate coin identifiers without separators in either part
fn arb_coin() -> impl Strategy<Value = CoinId> {
    ("[a-z]{1,10}", "[a-zA-Z0-9]{1,42}").prop_map(|(source, address)| CoinId::new(source, address))
}

// Helper to generate timestamps between 2017 and 2033
fn arb_timestamp() -> impl Strategy<Value = UnixTimestamp> {
    (1_500_000_000i64..2_000_000_000).prop_map(UnixTimestamp::new)
}

fn arb_batch() -> impl Strategy<Value = BatchCoins> {
    prop::collection::vec(
        (arb_coin(), prop::collection::vec(arb_timestamp(), 0..4)),
        1..6,
    )
    .prop_map(|entries| {
        let mut batch = BatchCoins::new();
        for (coin, timestamps) in entries {
            batch.push(&coin, timestamps);
        }
        batch
    })
}

fn decode_structural(encoded: &str) -> String {
    encoded
        .replace("%7B", "{")
        .replace("%7D", "}")
        .replace("%5B", "[")
        .replace("%5D", "]")
        .replace("%22", "\"")
}

proptest! {
    /// Property: normal encoding lists every coin once, in input order
    #[test]
    fn prop_normal_encoding_preserves_order(coins in prop::collection::vec(arb_coin(), 1..8)) {
        let encoded = encode_normal(&coins);
        let parts: Vec<&str> = encoded.split(',').collect();

        prop_assert_eq!(parts.len(), coins.len());
        for (part, coin) in parts.iter().zip(&coins) {
            prop_assert_eq!(part.to_string(), coin.to_string());
        }
    }

    /// Property: JSON encoding leaves no structural characters or whitespace behind
    #[test]
    fn prop_json_encoding_escapes_structure(batch in arb_batch()) {
        let encoded = encode_json(&batch.to_value());

        prop_assert!(!encoded.is_empty());
        for c in ['{', '}', '[', ']', '"'] {
            prop_assert!(!encoded.contains(c), "found raw {} in {}", c, encoded);
        }
        prop_assert!(!encoded.chars().any(char::is_whitespace));
    }

    /// Property: undoing the five escapes yields the original JSON value
    #[test]
    fn prop_json_encoding_is_reversible(batch in arb_batch()) {
        let value = batch.to_value();
        let decoded: Value = serde_json::from_str(&decode_structural(&encode_json(&value))).unwrap();

        prop_assert_eq!(decoded, value);
    }

    /// Property: batch keys follow first insertion, duplicates extend the list
    #[test]
    fn prop_batch_merges_duplicates(
        coin in arb_coin(),
        first in prop::collection::vec(arb_timestamp(), 0..4),
        second in prop::collection::vec(arb_timestamp(), 0..4),
    ) {
        let batch = BatchCoins::new()
            .with(&coin, first.clone())
            .with(&coin, second.clone());

        prop_assert_eq!(batch.len(), 1);
        let (key, timestamps) = batch.iter().next().unwrap();
        prop_assert_eq!(key.to_string(), coin.to_string());
        prop_assert_eq!(timestamps.len(), first.len() + second.len());
    }

    /// Property: list encoding is a plain comma join
    #[test]
    fn prop_list_encoding_joins(items in prop::collection::vec("0x[0-9a-f]{8}", 0..6)) {
        prop_assert_eq!(encode_list(&items), items.join(","));
    }

    /// Property: a chart request carries exactly one of start or end
    #[test]
    fn prop_chart_bounds_are_exclusive(
        coins in prop::collection::vec(arb_coin(), 1..4),
        start in prop::option::of(arb_timestamp()),
        end in prop::option::of(arb_timestamp()),
        span in 0u32..100,
    ) {
        let mut options = ChartOptions::default().span(span);
        if let Some(start) = start {
            options = options.start(start);
        }
        if let Some(end) = end {
            options = options.end(end);
        }

        match (start, end, coins::chart(&coins, options)) {
            (Some(_), Some(_), result) => {
                let conflicted = matches!(result, Err(RequestError::ConflictingArguments { .. }));
                prop_assert!(conflicted);
            }
            (Some(start), None, Ok(request)) => {
                prop_assert_eq!(&request.query_pairs()[0], &("start", start.to_string()));
            }
            (None, Some(end), Ok(request)) => {
                prop_assert_eq!(&request.query_pairs()[0], &("end", end.to_string()));
            }
            (None, None, Ok(request)) => {
                prop_assert_eq!(request.query_pairs()[0].0, "end");
            }
            (_, _, Err(e)) => prop_assert!(false, "unexpected error: {}", e),
        }
    }

    /// Property: overridden base URLs never end with a slash
    #[test]
    fn prop_base_url_override_is_trimmed(host in "[a-z]{1,12}", slashes in 0usize..4) {
        let url = format!("http://{host}.example{}", "/".repeat(slashes));
        let config = LlamaConfigBuilder::new().all_base_urls(url).build();

        for service in Service::ALL {
            let base = config.get_base_url(service);
            prop_assert!(!base.ends_with('/'));
            prop_assert_eq!(base, format!("http://{host}.example"));
        }
    }
}
