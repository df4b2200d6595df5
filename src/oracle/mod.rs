//! External data clients: the price feed and the gas tier oracle.
//!
//! Both publish `Option<snapshot>` over `tokio::sync::watch` channels,
//! starting at `None` until the first successful fetch. Consumers read the
//! latest value without blocking; stale snapshots are acceptable as long as
//! their age is surfaced.

pub mod gas;
pub mod price;

pub use gas::{GasOracle, spawn_gas_watcher, tiers_from_base_fee};
pub use price::{PriceOracle, spawn_price_watcher};
