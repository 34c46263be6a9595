//! Matching Engine
//!
//! Reads a batch of order commands from disk, drives them through the
//! price-time priority matching engine, and writes the resulting trades and
//! residual order-book snapshots back out.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod driver;
mod engine;
mod orderbook;
mod queue;

use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    init_tracing(&config)?;

    info!(
        "Starting Matching Engine v{}",
        env!("CARGO_PKG_VERSION")
    );

    let output = driver::run_from_file(&config).await?;

    info!(
        trades = output.trades.len(),
        pairs = output.orderbooks.len(),
        "finished"
    );

    Ok(())
}

fn init_tracing(config: &Config) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    Ok(())
}
