//! Well-known endpoints and request defaults
//!
//! This module centralizes the base URLs and default parameter values used
//! throughout the crate.

/// Default base URLs of the DefiLlama API subdomains
pub mod base_urls {
    /// TVL, protocols, volumes and fees
    pub const TVL: &str = "https://api.llama.fi";

    /// Token prices and block lookups
    pub const COINS: &str = "https://coins.llama.fi";

    /// Yield pools
    pub const YIELDS: &str = "https://yields.llama.fi";

    /// Stablecoin supply and prices
    pub const STABLECOINS: &str = "https://stablecoins.llama.fi";

    /// Bridge volumes and transactions
    pub const BRIDGES: &str = "https://bridges.llama.fi";

    /// Function and event signature decoding
    pub const ABI_DECODER: &str = "https://abi-decoder.llama.fi";
}

/// Browser-like user agent sent with every request.
///
/// Some API edges reject requests without a browser user agent.
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/111.0.0.0 Safari/537.36";

/// Default time window on either side of a timestamp when locating a price.
pub const DEFAULT_SEARCH_WIDTH: &str = "6h";

/// Default search width for price charts.
pub const DEFAULT_CHART_SEARCH_WIDTH: &str = "3h";

/// Default spacing between data points for charts and percentage changes.
pub const DEFAULT_PERIOD: &str = "24h";

/// Default number of bridge transactions returned.
pub const DEFAULT_TRANSACTION_LIMIT: u32 = 100;

/// Chain slug meaning "all chains" for bridge volume.
pub const ALL_CHAINS: &str = "all";
