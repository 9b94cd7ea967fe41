//! Error types for the defillama client.
//!
//! This module follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling: [`RequestError`]
//!   for parameters that cannot become a request, [`HttpError`] for failures
//!   while talking to the API
//! - **Unified error type** ([`LlamaError`]) for convenience when you don't
//!   need to distinguish between error sources
//!
//! # Examples
//!
//! ## Fine-grained error handling
//!
//! ```rust,ignore
//! use defillama::{tvl, HttpError, LlamaClient, LlamaError};
//!
//! async fn example(client: &LlamaClient) {
//!     match client.send(&tvl::chains()).await {
//!         Ok(chains) => println!("{} chains", chains.as_array().map_or(0, Vec::len)),
//!         Err(LlamaError::Http(HttpError::Transport { url, .. })) => {
//!             eprintln!("Could not reach {url}");
//!         }
//!         Err(e) => eprintln!("Other error: {e}"),
//!     }
//! }
//! ```
//!
//! ## Using the unified error type
//!
//! ```rust,ignore
//! use defillama::{coins, CoinId, LlamaClient, LlamaError};
//!
//! async fn example(client: &LlamaClient) -> Result<(), LlamaError> {
//!     let request = coins::chart(&[CoinId::coingecko("ethereum")], Default::default())?;
//!     let chart = client.send(&request).await?;
//!     // RequestError and HttpError both convert into LlamaError via `?`
//!     Ok(())
//! }
//! ```

mod http;
mod request;

pub use http::HttpError;
pub use request::RequestError;

/// Unified error type for all defillama operations.
///
/// All module-specific error types convert to `LlamaError` via `From`, so `?`
/// propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum LlamaError {
    /// The request could not be built.
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    /// The request failed on the wire or its response could not be decoded.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The JSON response did not match the requested Rust type.
    #[error("Response does not match the requested type: {0}")]
    Deserialize(#[from] serde_json::Error),
}
