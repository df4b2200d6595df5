//! Configuration loader and application settings.

use crate::aggregator::QuoteRequest;
use crate::errors::{AppError, Result};
use crate::quote::{QuoteSettings, TradeDirection};
use url::Url;

/// Consolidated application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the exchange-rate feed.
    pub feed_url: String,
    /// RPC endpoint for the Ethereum-compatible node backing the gas oracle.
    pub rpc_url: String,
    /// Feed symbol for the quoted pair.
    pub symbol: String,
    /// Price snapshot refresh interval in seconds.
    pub price_refresh_secs: u64,
    /// Gas tier refresh interval in seconds.
    pub gas_refresh_secs: u64,
    /// Price snapshot age past which an on-demand refresh is triggered.
    pub max_snapshot_age_secs: u64,
    /// The standing quote request evaluated by the loop.
    pub request: QuoteRequest,
    /// Slippage tolerance and gas tier preference.
    pub settings: QuoteSettings,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `FEED_URL` and `RPC_URL` are required; everything else has a default.
    /// Malformed numbers fall back to their defaults, unknown enum values
    /// are configuration errors.
    pub fn load() -> Result<Self> {
        let feed_url = std::env::var("FEED_URL")
            .map_err(|_| AppError::Config("Set FEED_URL env var to the price feed base URL".into()))?;
        Url::parse(&feed_url)?;
        let rpc_url = std::env::var("RPC_URL")
            .map_err(|_| AppError::Config("Set RPC_URL env var to your node HTTP endpoint".into()))?;
        Url::parse(&rpc_url)?;

        let symbol = env_or("SYMBOL", "time-eth");

        let direction: TradeDirection = env_or("QUOTE_DIRECTION", "buy").parse()?;
        let denomination = env_or("QUOTE_DENOMINATION", "eth").parse()?;
        let request = QuoteRequest {
            direction,
            amount: env_f64("QUOTE_AMOUNT", 1.0),
            denomination,
        };

        let settings = QuoteSettings::new(
            env_f64("SLIPPAGE_PCT", 0.5),
            env_or("GAS_TIER", "standard").parse()?,
        );

        Ok(Self {
            feed_url,
            rpc_url,
            symbol,
            price_refresh_secs: env_u64("PRICE_REFRESH_SECS", 30),
            gas_refresh_secs: env_u64("GAS_REFRESH_SECS", 10),
            max_snapshot_age_secs: env_u64("MAX_SNAPSHOT_AGE_SECS", 90),
            request,
            settings,
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.into())
}

fn env_f64(name: &str, default: f64) -> f64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
