//! HTTP price feed client.
//!
//! Fetches the token/ETH/USD exchange rates as a [`PriceSnapshot`], on a
//! periodic interval and on explicit refresh. Fetches may overlap; every
//! attempt carries a sequence number and only results newer than the last
//! published snapshot are applied, so late replies can never clobber a
//! fresher quote basis.

use crate::errors::{AppError, Result};
use crate::models::PriceSnapshot;
use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;
use std::time::SystemTime;
use tokio::sync::{Notify, mpsc, watch};
use tracing::{debug, warn};
use url::Url;

#[derive(Debug, Deserialize)]
struct RateMsg {
    #[serde(rename = "tokenEth")]
    token_eth: String,
    #[serde(rename = "tokenUsd")]
    token_usd: String,
    #[serde(rename = "ethUsd")]
    eth_usd: String,
}

/// Client for the exchange-rate feed endpoint.
#[derive(Clone)]
pub struct PriceOracle {
    http: reqwest::Client,
    endpoint: Url,
}

impl PriceOracle {
    pub fn new(base_url: &str, symbol: &str) -> Result<Self> {
        let endpoint = Url::parse(base_url)?.join(&format!("v1/quotes/{}", symbol))?;
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
        })
    }

    /// Fetch one snapshot, stamping it with the given sequence number.
    pub async fn fetch_snapshot(&self, seq: u64) -> Result<PriceSnapshot> {
        let msg: RateMsg = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(PriceSnapshot {
            token_price_in_eth: parse_rate(&msg.token_eth)?,
            token_price_in_usd: parse_rate(&msg.token_usd)?,
            eth_price_in_usd: parse_rate(&msg.eth_usd)?,
            observed_at: SystemTime::now(),
            seq,
        })
    }
}

/// Parse a decimal-string rate from the feed. Rates must be finite and
/// strictly positive; anything else is an unusable payload.
fn parse_rate(raw: &str) -> Result<f64> {
    let value = BigDecimal::from_str(raw)
        .ok()
        .and_then(|bd| bd.to_f64())
        .ok_or_else(|| AppError::Feed(format!("unparseable rate: {raw}")))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AppError::Feed(format!("non-positive rate: {raw}")))
    }
}

/// Publish `snap` unless an even newer snapshot already went out.
/// Returns whether the snapshot was applied.
pub fn publish_if_newer(
    tx: &watch::Sender<Option<PriceSnapshot>>,
    last_published: &mut u64,
    snap: PriceSnapshot,
) -> bool {
    if snap.seq <= *last_published {
        return false;
    }
    *last_published = snap.seq;
    let _ = tx.send(Some(snap));
    true
}

/// Spawn the background price watcher: fetch every `interval_secs` and on
/// each `refresh` notification, publishing last-write-wins by sequence.
pub async fn spawn_price_watcher(
    oracle: PriceOracle,
    tx: watch::Sender<Option<PriceSnapshot>>,
    refresh: Arc<Notify>,
    interval_secs: u64,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let (done_tx, mut done_rx) = mpsc::channel::<(u64, Result<PriceSnapshot>)>(8);
        let mut ticker = tokio::time::interval(std::time::Duration::from_secs(interval_secs));
        let mut next_seq: u64 = 0;
        let mut last_published: u64 = 0;
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    next_seq += 1;
                    start_fetch(&oracle, next_seq, done_tx.clone());
                }
                _ = refresh.notified() => {
                    next_seq += 1;
                    debug!(seq = next_seq, "[FEED] on-demand refresh");
                    start_fetch(&oracle, next_seq, done_tx.clone());
                }
                Some((seq, res)) = done_rx.recv() => {
                    match res {
                        Ok(snap) => {
                            if !publish_if_newer(&tx, &mut last_published, snap) {
                                debug!(seq, "[FEED] discarding superseded snapshot");
                            }
                        }
                        Err(e) => warn!(error = %e, seq, "[FEED] price fetch failed"),
                    }
                }
            }
        }
    })
}

fn start_fetch(
    oracle: &PriceOracle,
    seq: u64,
    done: mpsc::Sender<(u64, Result<PriceSnapshot>)>,
) {
    let oracle = oracle.clone();
    tokio::spawn(async move {
        let res = oracle.fetch_snapshot(seq).await;
        let _ = done.send((seq, res)).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rate_message_shape() {
        let raw = r#"{"tokenEth":"0.001","tokenUsd":"2.31","ethUsd":"2310.55"}"#;
        let msg: RateMsg = serde_json::from_str(raw).expect("json should parse");
        assert_eq!(parse_rate(&msg.token_eth).unwrap(), 0.001);
        assert_eq!(parse_rate(&msg.eth_usd).unwrap(), 2310.55);
    }

    #[test]
    fn rejects_garbage_and_non_positive_rates() {
        assert!(parse_rate("abc").is_err());
        assert!(parse_rate("").is_err());
        assert!(parse_rate("0").is_err());
        assert!(parse_rate("-1.5").is_err());
    }

    #[test]
    fn out_of_order_snapshots_are_discarded() {
        let (tx, rx) = watch::channel::<Option<PriceSnapshot>>(None);
        let mut last = 0u64;
        let snap = |seq| PriceSnapshot {
            token_price_in_eth: 0.001,
            token_price_in_usd: 2.31,
            eth_price_in_usd: 2310.0,
            observed_at: SystemTime::now(),
            seq,
        };

        assert!(publish_if_newer(&tx, &mut last, snap(2)));
        // A slower fetch that started earlier finishes late; must not apply.
        assert!(!publish_if_newer(&tx, &mut last, snap(1)));
        assert_eq!(rx.borrow().map(|s| s.seq), Some(2));

        assert!(publish_if_newer(&tx, &mut last, snap(3)));
        assert_eq!(rx.borrow().map(|s| s.seq), Some(3));
    }

    #[test]
    fn endpoint_joins_symbol_path() {
        let oracle = PriceOracle::new("https://feed.example.com/", "time-eth").unwrap();
        assert_eq!(
            oracle.endpoint.as_str(),
            "https://feed.example.com/v1/quotes/time-eth"
        );
    }
}
