//! Gas tier oracle backed by an Ethereum-compatible RPC node.
//!
//! Tiers are derived from the latest block's EIP-1559 base fee: standard is
//! the base fee itself, fast and instant apply the inclusion-priority
//! multipliers below.

use crate::errors::{AppError, Result};
use crate::models::GasTierSnapshot;
use ethers::providers::{Http, Middleware, Provider};
use ethers::types::BlockNumber;
use std::sync::Arc;
use std::time::SystemTime;
use tokio::sync::watch;
use tracing::warn;

pub const FAST_MULTIPLIER: f64 = 1.25;
pub const INSTANT_MULTIPLIER: f64 = 1.5;

/// Handle for reading gas prices from a specific RPC endpoint.
#[derive(Clone)]
pub struct GasOracle {
    provider: Arc<Provider<Http>>,
}

impl GasOracle {
    pub fn new(rpc_url: &str) -> Result<Self> {
        let provider = Arc::new(Provider::<Http>::try_from(rpc_url)?);
        Ok(Self { provider })
    }

    /// Read the latest base fee and derive the three tiers.
    pub async fn fetch_tiers(&self) -> Result<GasTierSnapshot> {
        let block = self
            .provider
            .get_block(BlockNumber::Latest)
            .await?
            .ok_or_else(|| AppError::Feed("latest block unavailable".into()))?;
        let base_fee = block
            .base_fee_per_gas
            .ok_or_else(|| AppError::Feed("block carries no base fee".into()))?;
        let base_gwei = (base_fee.as_u128() as f64) / 1_000_000_000.0;
        Ok(tiers_from_base_fee(base_gwei))
    }
}

pub fn tiers_from_base_fee(base_gwei: f64) -> GasTierSnapshot {
    GasTierSnapshot {
        standard_gwei: base_gwei,
        fast_gwei: base_gwei * FAST_MULTIPLIER,
        instant_gwei: base_gwei * INSTANT_MULTIPLIER,
        observed_at: SystemTime::now(),
    }
}

/// Spawn a background task that republishes gas tiers every `interval_secs`.
/// A failed refresh keeps the previously published snapshot in place.
pub async fn spawn_gas_watcher(
    oracle: GasOracle,
    tx: watch::Sender<Option<GasTierSnapshot>>,
    interval_secs: u64,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(std::time::Duration::from_secs(interval_secs));
        loop {
            ticker.tick().await;
            match oracle.fetch_tiers().await {
                Ok(tiers) => {
                    let _ = tx.send(Some(tiers));
                }
                Err(e) => warn!(error = %e, "[GAS] tier refresh failed"),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_scale_from_base_fee() {
        let tiers = tiers_from_base_fee(20.0);
        assert_eq!(tiers.standard_gwei, 20.0);
        assert_eq!(tiers.fast_gwei, 25.0);
        assert_eq!(tiers.instant_gwei, 30.0);
    }

    #[test]
    fn zero_base_fee_yields_zero_tiers() {
        let tiers = tiers_from_base_fee(0.0);
        assert_eq!(tiers.standard_gwei, 0.0);
        assert_eq!(tiers.instant_gwei, 0.0);
    }
}
