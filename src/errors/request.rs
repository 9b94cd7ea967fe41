// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for building requests.
//!
//! These errors are raised before any network I/O happens: a request that
//! fails to build is never sent.

/// Errors that can occur while turning typed parameters into a request URL.
///
/// # Examples
///
/// ```rust
/// use defillama::{coins, ChartOptions, CoinId, RequestError, UnixTimestamp};
///
/// let options = ChartOptions::default()
///     .start(UnixTimestamp::new(1_664_364_537))
///     .end(UnixTimestamp::new(1_666_364_537));
///
/// match coins::chart(&[CoinId::coingecko("ethereum")], options) {
///     Err(RequestError::ConflictingArguments { first, second }) => {
///         assert_eq!((first, second), ("start", "end"));
///     }
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Two mutually exclusive parameters were both supplied.
    #[error("Use either {first} or {second} parameter, not both")]
    ConflictingArguments {
        /// Name of the first parameter
        first: &'static str,
        /// Name of the parameter it conflicts with
        second: &'static str,
    },

    /// The assembled URL could not be parsed.
    ///
    /// This usually means a configured base URL is malformed; path and query
    /// values are inserted verbatim and are not validated.
    #[error("Invalid request URL {url}")]
    InvalidUrl {
        /// The URL string that failed to parse
        url: String,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },
}

impl RequestError {
    /// Create a `ConflictingArguments` error for a pair of parameter names.
    pub fn conflicting_arguments(first: &'static str, second: &'static str) -> Self {
        RequestError::ConflictingArguments { first, second }
    }

    /// Create an `InvalidUrl` error from the offending string.
    pub fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
        RequestError::InvalidUrl {
            url: url.into(),
            source,
        }
    }
}
