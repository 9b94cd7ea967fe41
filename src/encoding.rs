// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Argument encoding for URL paths and query strings.
//!
//! The API takes token collections in three string shapes:
//!
//! - **normal**: `chain:address` pairs joined by commas, used in paths such as
//!   `/prices/current/{coins}` ([`encode_normal`])
//! - **encoded**: compact JSON with the structural characters `{ } [ ] "`
//!   percent-encoded, used for the `coins` query of `/batchHistorical`
//!   ([`encode_json`])
//! - **list**: plain strings joined by commas, used for ABI signatures
//!   ([`encode_list`])
//!
//! No encoder validates its input and none can fail. Output depends only on
//! the input and its order; empty input encodes to an empty string.

use serde_json::Value;

use crate::types::coins::CoinId;

/// Characters replaced in the encoded mode, with their replacements.
const ENCODED_CHARS: [(char, &str); 5] = [
    ('{', "%7B"),
    ('}', "%7D"),
    ('[', "%5B"),
    (']', "%5D"),
    ('"', "%22"),
];

/// Encode coins as `chain:address` pairs joined by commas.
///
/// ```
/// use defillama::{encoding::encode_normal, CoinId};
///
/// let coins = [CoinId::new("ethereum", "0xA"), CoinId::coingecko("bitcoin")];
/// assert_eq!(encode_normal(&coins), "ethereum:0xA,coingecko:bitcoin");
/// ```
pub fn encode_normal(coins: &[CoinId]) -> String {
    coins
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Encode a JSON value as whitespace-free JSON with `{ } [ ] "` percent-encoded.
///
/// Every other character, commas and colons included, is left as is. Empty
/// input (`null`, an empty array or an empty object) encodes to `""`.
///
/// ```
/// use defillama::encoding::encode_json;
/// use serde_json::json;
///
/// let value = json!({"coingecko:ethereum": [1666876743, 1666862343]});
/// assert_eq!(
///     encode_json(&value),
///     "%7B%22coingecko:ethereum%22:%5B1666876743,1666862343%5D%7D"
/// );
/// ```
pub fn encode_json(value: &Value) -> String {
    if is_empty(value) {
        return String::new();
    }
    let compact: String = value.to_string().chars().filter(|c| !c.is_whitespace()).collect();
    percent_encode_structural(&compact)
}

/// Join plain strings with commas.
///
/// ```
/// use defillama::encoding::encode_list;
///
/// assert_eq!(encode_list(&["sig1", "sig2"]), "sig1,sig2");
/// assert_eq!(encode_list::<&str>(&[]), "");
/// ```
pub fn encode_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

fn percent_encode_structural(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 2);
    for c in input.chars() {
        match ENCODED_CHARS.iter().find(|(raw, _)| *raw == c) {
            Some((_, code)) => out.push_str(code),
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normal_preserves_order() {
        let coins = [
            CoinId::new("ethereum", "0xA"),
            CoinId::coingecko("bitcoin"),
        ];
        assert_eq!(encode_normal(&coins), "ethereum:0xA,coingecko:bitcoin");

        let reversed = [coins[1].clone(), coins[0].clone()];
        assert_eq!(encode_normal(&reversed), "coingecko:bitcoin,ethereum:0xA");
    }

    #[test]
    fn test_normal_empty() {
        assert_eq!(encode_normal(&[]), "");
    }

    #[test]
    fn test_list_single_item_has_no_separator() {
        assert_eq!(encode_list(&["0x23b872dd".to_string()]), "0x23b872dd");
    }

    #[test]
    fn test_encoded_list_of_single_entry_maps() {
        let coins = vec![CoinId::new("ethereum", "0xA"), CoinId::coingecko("bitcoin")];
        let value = serde_json::to_value(&coins).unwrap();

        assert_eq!(
            encode_json(&value),
            "%5B%7B%22ethereum%22:%220xA%22%7D,%7B%22coingecko%22:%22bitcoin%22%7D%5D"
        );
    }

    #[test]
    fn test_encoded_strips_whitespace_inside_strings() {
        let value = json!({"a b": ["c d"]});
        assert_eq!(encode_json(&value), "%7B%22ab%22:%5B%22cd%22%5D%7D");
    }

    #[test]
    fn test_encoded_leaves_other_characters() {
        let value = json!(["x:y,z%/?&="]);
        assert_eq!(encode_json(&value), "%5B%22x:y,z%/?&=%22%5D");
    }

    #[test]
    fn test_encoded_preserves_key_order() {
        let mut map = serde_json::Map::new();
        map.insert("zeta".into(), json!([1]));
        map.insert("alpha".into(), json!([2]));

        assert_eq!(
            encode_json(&Value::Object(map)),
            "%7B%22zeta%22:%5B1%5D,%22alpha%22:%5B2%5D%7D"
        );
    }

    #[test]
    fn test_encoded_empty_input() {
        assert_eq!(encode_json(&json!([])), "");
        assert_eq!(encode_json(&json!({})), "");
        assert_eq!(encode_json(&Value::Null), "");
        assert_eq!(encode_json(&json!([[]])), "%5B%5B%5D%5D");
    }
}
