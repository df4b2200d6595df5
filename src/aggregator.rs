//! Quote evaluation loop.
//!
//! Re-quotes the configured request once per second against whatever
//! snapshots are freshest. Never blocks on a fetch: each tick reads only the
//! latest published values, so superseded data is dropped implicitly.

use crate::models::{GasTierSnapshot, PriceSnapshot};
use crate::quote::{self, QuoteDenomination, QuoteSettings, SwapQuote, TradeDirection};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, watch};
use tracing::info;

/// The standing request quoted on every tick.
#[derive(Debug, Clone, Copy)]
pub struct QuoteRequest {
    pub direction: TradeDirection,
    pub amount: f64,
    pub denomination: QuoteDenomination,
}

/// Spawn the main quoting loop.
///
/// When the price snapshot ages past `max_snapshot_age`, an on-demand
/// refresh is fired at the price watcher; quoting continues off the stale
/// snapshot in the meantime, with its age logged alongside the quote.
pub async fn spawn_quote_loop(
    price_rx: watch::Receiver<Option<PriceSnapshot>>,
    gas_rx: watch::Receiver<Option<GasTierSnapshot>>,
    refresh: Arc<Notify>,
    request: QuoteRequest,
    settings: QuoteSettings,
    max_snapshot_age: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(1));
        let mut ticks: u64 = 0;
        let mut last_quote: Option<SwapQuote> = None;

        loop {
            ticker.tick().await;
            ticks += 1;

            let prices = *price_rx.borrow();
            let gas = *gas_rx.borrow();
            let (Some(prices), Some(gas)) = (prices, gas) else {
                if ticks % 5 == 0 {
                    info!("[HEARTBEAT] waiting for feeds (price or gas not ready)");
                }
                continue;
            };

            if prices.age() > max_snapshot_age {
                refresh.notify_one();
            }

            match quote::compute_quote(
                request.direction,
                request.amount,
                request.denomination,
                &prices,
                &gas,
                &settings,
            ) {
                Some(q) => {
                    if last_quote != Some(q) || ticks % 30 == 0 {
                        info!(
                            direction = ?q.direction,
                            input = q.input_amount,
                            output = q.output_amount,
                            min_received = ?q.minimum_received,
                            max_sold = ?q.maximum_sold,
                            gas_eth = q.estimated_gas_eth,
                            gas_usd = q.estimated_gas_usd,
                            impact_pct = q.price_impact_pct,
                            price_age_secs = prices.age().as_secs(),
                            "[QUOTE] quote updated"
                        );
                    }
                    last_quote = Some(q);
                }
                None => {
                    if last_quote.take().is_some() || ticks % 5 == 0 {
                        info!("[QUOTE] configure inputs to see a quote");
                    }
                }
            }
        }
    })
}
