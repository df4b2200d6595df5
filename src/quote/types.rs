use crate::errors::AppError;
use std::str::FromStr;

/// Slippage tolerance bounds accepted from configuration, in percent.
pub const MIN_SLIPPAGE_PCT: f64 = 0.1;
pub const MAX_SLIPPAGE_PCT: f64 = 5.0;
const DEFAULT_SLIPPAGE_PCT: f64 = 0.5;

/// Direction of the swap from the user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeDirection {
    /// Spend ETH or USD, receive tokens.
    Buy,
    /// Spend tokens, receive ETH.
    Sell,
}

impl FromStr for TradeDirection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            other => Err(AppError::Config(format!("unknown direction: {other}"))),
        }
    }
}

/// Currency the input amount is denominated in.
///
/// A buy is funded in `Eth` or `Usd`; a sell always spends `Token`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteDenomination {
    Eth,
    Usd,
    Token,
}

impl FromStr for QuoteDenomination {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "eth" => Ok(Self::Eth),
            "usd" => Ok(Self::Usd),
            "token" => Ok(Self::Token),
            other => Err(AppError::Config(format!("unknown denomination: {other}"))),
        }
    }
}

/// Named speed/cost preset for transaction inclusion priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GasTier {
    Standard,
    Fast,
    Instant,
}

impl FromStr for GasTier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "fast" => Ok(Self::Fast),
            "instant" => Ok(Self::Instant),
            other => Err(AppError::Config(format!("unknown gas tier: {other}"))),
        }
    }
}

/// User-adjustable quoting preferences. Built once from configuration and
/// passed into the calculator by value; no ambient mutable state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteSettings {
    /// Accepted deviation between quoted and executed price, in percent.
    /// Always within [`MIN_SLIPPAGE_PCT`], [`MAX_SLIPPAGE_PCT`].
    pub slippage_tolerance_pct: f64,
    pub gas_tier: GasTier,
}

impl QuoteSettings {
    /// Build settings, clamping the slippage tolerance into its valid range.
    /// Non-finite tolerances fall back to the default.
    pub fn new(slippage_tolerance_pct: f64, gas_tier: GasTier) -> Self {
        let slippage_tolerance_pct = if slippage_tolerance_pct.is_finite() {
            slippage_tolerance_pct.clamp(MIN_SLIPPAGE_PCT, MAX_SLIPPAGE_PCT)
        } else {
            DEFAULT_SLIPPAGE_PCT
        };
        Self {
            slippage_tolerance_pct,
            gas_tier,
        }
    }
}

impl Default for QuoteSettings {
    fn default() -> Self {
        Self::new(DEFAULT_SLIPPAGE_PCT, GasTier::Standard)
    }
}

/// A computed quote. Derived, recomputed on every input change, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapQuote {
    pub direction: TradeDirection,
    pub input_amount: f64,
    /// Tokens received on a buy; ETH received on a sell. 6 decimal digits.
    pub output_amount: f64,
    /// Worst-case amount received on a buy. `Some` iff direction is buy.
    pub minimum_received: Option<f64>,
    /// Slippage-adjusted bound on the counter-asset side of a sell.
    /// `Some` iff direction is sell.
    pub maximum_sold: Option<f64>,
    pub estimated_gas_eth: f64,
    pub estimated_gas_usd: f64,
    /// Rough size-based approximation, clamped to [0, 5]. Not a liquidity
    /// model; treat as indicative only.
    pub price_impact_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_config_strings() {
        assert_eq!("buy".parse::<TradeDirection>().unwrap(), TradeDirection::Buy);
        assert_eq!("SELL".parse::<TradeDirection>().unwrap(), TradeDirection::Sell);
        assert_eq!("usd".parse::<QuoteDenomination>().unwrap(), QuoteDenomination::Usd);
        assert_eq!("fast".parse::<GasTier>().unwrap(), GasTier::Fast);
        assert!("warp".parse::<GasTier>().is_err());
    }

    #[test]
    fn settings_clamp_slippage() {
        assert_eq!(QuoteSettings::new(0.01, GasTier::Standard).slippage_tolerance_pct, 0.1);
        assert_eq!(QuoteSettings::new(9.0, GasTier::Standard).slippage_tolerance_pct, 5.0);
        assert_eq!(QuoteSettings::new(1.5, GasTier::Standard).slippage_tolerance_pct, 1.5);
        assert_eq!(
            QuoteSettings::new(f64::NAN, GasTier::Standard).slippage_tolerance_pct,
            0.5
        );
    }
}
