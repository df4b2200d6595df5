use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use swap_quoter::{
    aggregator,
    config::AppConfig,
    oracle::{self, GasOracle, PriceOracle},
    utils,
};
use tokio::sync::{Notify, watch};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    utils::init_logging();

    let cfg = AppConfig::load()?;
    tracing::info!(
        symbol = %cfg.symbol,
        direction = ?cfg.request.direction,
        amount = cfg.request.amount,
        slippage_pct = cfg.settings.slippage_tolerance_pct,
        gas_tier = ?cfg.settings.gas_tier,
        "[INIT] swap-quoter starting"
    );

    // Feed channels; both start unready until the first successful fetch.
    let (price_tx, price_rx) = watch::channel(None);
    let (gas_tx, gas_rx) = watch::channel(None);
    let refresh = Arc::new(Notify::new());

    let price_oracle = PriceOracle::new(&cfg.feed_url, &cfg.symbol)?;
    let gas_oracle = GasOracle::new(&cfg.rpc_url)?;

    let price_task = oracle::spawn_price_watcher(
        price_oracle,
        price_tx,
        refresh.clone(),
        cfg.price_refresh_secs,
    )
    .await;
    let gas_task = oracle::spawn_gas_watcher(gas_oracle, gas_tx, cfg.gas_refresh_secs).await;
    tracing::info!(
        price_refresh_secs = cfg.price_refresh_secs,
        gas_refresh_secs = cfg.gas_refresh_secs,
        "[INIT] oracle watchers started"
    );

    let quote_task = aggregator::spawn_quote_loop(
        price_rx,
        gas_rx,
        refresh,
        cfg.request,
        cfg.settings,
        Duration::from_secs(cfg.max_snapshot_age_secs),
    )
    .await;

    // Wait indefinitely for the background tasks (they never finish)
    let _ = futures::join!(price_task, gas_task, quote_task);
    Ok(())
}
