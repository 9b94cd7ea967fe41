//! Typed client for the DefiLlama analytics API.
//!
//! Endpoint modules ([`tvl`], [`coins`], [`yields`], [`stablecoins`],
//! [`bridges`], [`volumes`], [`fees`], [`abi_decoder`]) build
//! [`LlamaRequest`] values without doing any I/O. A [`LlamaClient`] (or
//! [`blocking::LlamaClient`]) sends each one as a single HTTP request and
//! returns the decoded JSON.
//!
//! ```rust,ignore
//! use defillama::{coins, tvl, CoinId, CoinPrices, LlamaClient};
//!
//! let client = LlamaClient::new()?;
//! let tvl = client.send(&tvl::protocol_tvl("uniswap")).await?;
//! let prices: CoinPrices = client
//!     .send_as(&coins::current_prices(&[CoinId::coingecko("ethereum")], None))
//!     .await?;
//! ```

pub mod abi_decoder;
#[cfg(feature = "blocking")]
pub mod blocking;
pub mod bridges;
mod client;
pub mod coins;
mod config;
pub mod encoding;
mod errors;
pub mod fees;
mod request;
mod response;
mod spans;
pub mod stablecoins;
pub mod tvl;
mod types;
pub mod volumes;
pub mod yields;

pub use client::LlamaClient;
pub use coins::ChartOptions;
pub use config::{constants, LlamaConfig, LlamaConfigBuilder};
pub use errors::{HttpError, LlamaError, RequestError};
pub use request::{LlamaRequest, Method, Service};
pub use types::coins::{llama_chain_slug, BatchCoins, CoinId, COINGECKO};
pub use types::params::{DataType, FeeKind, OptionsVolume, OverviewOptions};
pub use types::responses::*;
pub use types::timestamp::UnixTimestamp;
