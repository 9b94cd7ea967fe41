/// Example printing a small market snapshot from the public DefiLlama API
///
/// This example shows how to:
/// 1. Configure a client, optionally pointing a service at another host
/// 2. Build coin identifiers from chain slugs and from EVM addresses
/// 3. Decode responses into typed views with `send_as`
/// 4. Keep working with raw JSON where no typed view exists
///
/// Run with:
/// ```bash
/// PROTOCOL=aave \
/// COINS_BASE_URL=https://coins.llama.fi \
/// cargo run --example market_snapshot
/// ```
use alloy_chains::NamedChain;
use alloy_primitives::address;
use anyhow::{Context, Result};
use defillama::{
    coins, stablecoins, tvl, yields, ChartOptions, CoinId, CoinPrices, LlamaClient,
    LlamaConfigBuilder, Pool, PriceSeries, Service,
};
use std::collections::HashMap;
use std::env;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    dotenvy::dotenv().ok();

    let protocol = env::var("PROTOCOL").unwrap_or_else(|_| "uniswap".to_string());

    let mut builder = LlamaConfigBuilder::new().timeout(Duration::from_secs(30));
    if let Ok(url) = env::var("COINS_BASE_URL") {
        builder = builder.base_url(Service::Coins, url);
    }
    let client = LlamaClient::with_config(builder.build()).context("Failed to build client")?;

    let total: f64 = client
        .send_as(&tvl::protocol_tvl(&protocol))
        .await
        .with_context(|| format!("Failed to fetch TVL of {protocol}"))?;
    info!(protocol = %protocol, tvl_usd = total, "Protocol TVL");

    let usdc = CoinId::evm(
        NamedChain::Mainnet,
        address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
    )
    .context("Mainnet has no DefiLlama slug")?;
    let tokens = [CoinId::coingecko("ethereum"), usdc];

    let prices: CoinPrices = client
        .send_as(&coins::current_prices(&tokens, None))
        .await
        .context("Failed to fetch current prices")?;
    for token in &tokens {
        if let Some(price) = prices.get(&token.to_string()) {
            info!(coin = %token, price = price.price, confidence = ?price.confidence, "Current price");
        }
    }

    let chart_request = coins::chart(&tokens[..1], ChartOptions::default().span(7).period("1d"))?;
    let chart: HashMap<String, PriceSeries> = client
        .send_as(&chart_request)
        .await
        .context("Failed to fetch price chart")?;
    for (coin, series) in &chart {
        info!(coin = %coin, points = series.prices.len(), "Weekly chart");
    }

    let pools: Vec<Pool> = client
        .send_as(&yields::pools())
        .await
        .context("Failed to fetch yield pools")?;
    if let Some(best) = pools
        .iter()
        .filter(|p| p.tvl_usd > 100_000_000.0)
        .max_by(|a, b| a.apy.unwrap_or(0.0).total_cmp(&b.apy.unwrap_or(0.0)))
    {
        info!(pool = %best.pool, project = %best.project, apy = ?best.apy, "Best large pool");
    }

    let pegged = client
        .send(&stablecoins::stablecoins(false))
        .await
        .context("Failed to fetch stablecoins")?;
    info!(
        count = pegged.as_array().map_or(0, Vec::len),
        "Stablecoins tracked"
    );

    Ok(())
}
