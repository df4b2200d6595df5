use crate::models::{GasTierSnapshot, PriceSnapshot};
use crate::quote::types::{GasTier, QuoteDenomination, QuoteSettings, SwapQuote, TradeDirection};
use crate::utils::{round_fiat, round_token};

/// Fixed gas consumed by a single swap, in gas units.
pub const SWAP_GAS_UNITS: f64 = 150_000.0;

/// Linear impact slope: percent of price movement per 1 ETH-equivalent of
/// trade size. A deliberately rough stand-in, not a liquidity-curve model.
pub const PRICE_IMPACT_PCT_PER_ETH: f64 = 0.1;

/// Upper clamp on the impact approximation.
pub const MAX_PRICE_IMPACT_PCT: f64 = 5.0;

/// Compute a swap quote from the latest snapshots and user settings.
///
/// # Arguments
/// * `direction` - Buy (spend ETH/USD for tokens) or sell (spend tokens for ETH)
/// * `input_amount` - Amount spent, denominated per `denomination`
/// * `denomination` - Currency of `input_amount`; buys take ETH or USD, sells take tokens
/// * `prices` - Latest exchange-rate snapshot
/// * `gas` - Latest gas tier snapshot
/// * `settings` - Slippage tolerance and gas tier preference
///
/// # Returns
/// `None` when there is nothing sensible to quote: non-finite or non-positive
/// input, non-positive rates, a direction/denomination pairing that is not
/// defined, or an output that rounds to zero. This function never fails in
/// any other way; upstream fetch errors are the oracle layer's problem and
/// are never visible here.
///
/// Pure and deterministic: identical inputs produce identical quotes.
pub fn compute_quote(
    direction: TradeDirection,
    input_amount: f64,
    denomination: QuoteDenomination,
    prices: &PriceSnapshot,
    gas: &GasTierSnapshot,
    settings: &QuoteSettings,
) -> Option<SwapQuote> {
    if !input_amount.is_finite() || input_amount <= 0.0 {
        return None;
    }
    if prices.token_price_in_eth <= 0.0
        || prices.token_price_in_usd <= 0.0
        || prices.eth_price_in_usd <= 0.0
    {
        return None;
    }

    // Output amount plus the trade's ETH-equivalent size for impact sizing.
    let (output_raw, trade_size_eth) = match (direction, denomination) {
        (TradeDirection::Buy, QuoteDenomination::Eth) => {
            (input_amount / prices.token_price_in_eth, input_amount)
        }
        (TradeDirection::Buy, QuoteDenomination::Usd) => (
            input_amount / prices.token_price_in_usd,
            input_amount / prices.eth_price_in_usd,
        ),
        (TradeDirection::Sell, QuoteDenomination::Token) => {
            let eth_out = input_amount * prices.token_price_in_eth;
            (eth_out, eth_out)
        }
        _ => return None,
    };
    if !output_raw.is_finite() || output_raw <= 0.0 {
        return None;
    }

    let output_amount = round_token(output_raw);
    if output_amount <= 0.0 {
        // Sub-microunit trade; a present quote must carry a positive output.
        return None;
    }

    let slippage = settings.slippage_tolerance_pct / 100.0;
    let (minimum_received, maximum_sold) = match direction {
        TradeDirection::Buy => (Some(round_token(output_raw * (1.0 - slippage))), None),
        TradeDirection::Sell => (None, Some(round_token(output_raw * (1.0 + slippage)))),
    };

    let gas_price_gwei = match settings.gas_tier {
        GasTier::Standard => gas.standard_gwei,
        GasTier::Fast => gas.fast_gwei,
        GasTier::Instant => gas.instant_gwei,
    };
    let gas_eth_raw = SWAP_GAS_UNITS * gas_price_gwei * 1e-9;
    let estimated_gas_eth = round_token(gas_eth_raw);
    let estimated_gas_usd = round_fiat(gas_eth_raw * prices.eth_price_in_usd);

    let price_impact_pct = round_fiat(
        (trade_size_eth * PRICE_IMPACT_PCT_PER_ETH).clamp(0.0, MAX_PRICE_IMPACT_PCT),
    );

    Some(SwapQuote {
        direction,
        input_amount,
        output_amount,
        minimum_received,
        maximum_sold,
        estimated_gas_eth,
        estimated_gas_usd,
        price_impact_pct,
    })
}
