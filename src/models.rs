//! Shared data structures used throughout the application.

use std::time::{Duration, SystemTime};

/// Exchange-rate snapshot for the project token against its base asset and
/// fiat reference. Immutable once fetched; superseded by the next fetch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSnapshot {
    /// Token price denominated in ETH (e.g., 0.001 ETH per token).
    pub token_price_in_eth: f64,
    /// Token price denominated in USD.
    pub token_price_in_usd: f64,
    /// ETH price denominated in USD.
    pub eth_price_in_usd: f64,
    pub observed_at: SystemTime,
    /// Fetch sequence number assigned by the watcher; strictly increasing
    /// per attempt, used to discard out-of-order completions.
    pub seq: u64,
}

impl PriceSnapshot {
    /// Age of the snapshot relative to now. Zero if the clock went backwards.
    pub fn age(&self) -> Duration {
        SystemTime::now()
            .duration_since(self.observed_at)
            .unwrap_or(Duration::ZERO)
    }
}

/// Gas price presets in gwei for the three inclusion-priority tiers.
/// Same lifecycle as [`PriceSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasTierSnapshot {
    pub standard_gwei: f64,
    pub fast_gwei: f64,
    pub instant_gwei: f64,
    pub observed_at: SystemTime,
}

impl GasTierSnapshot {
    pub fn age(&self) -> Duration {
        SystemTime::now()
            .duration_since(self.observed_at)
            .unwrap_or(Duration::ZERO)
    }
}
