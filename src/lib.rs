//! Core library for the swap-quoter project.
//!
//! Quotes swaps between the project token and its base asset (ETH) / fiat
//! reference (USD): a pure calculator fed by a periodically refreshed price
//! feed and a gas tier oracle, re-evaluated by a background quote loop.

pub mod aggregator;
pub mod config;
pub mod errors;
pub mod models;
pub mod oracle;
pub mod quote;
pub mod utils;
