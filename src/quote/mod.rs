pub mod calc;
pub mod types;

pub use calc::{MAX_PRICE_IMPACT_PCT, PRICE_IMPACT_PCT_PER_ETH, SWAP_GAS_UNITS, compute_quote};
pub use types::{
    GasTier, QuoteDenomination, QuoteSettings, SwapQuote, TradeDirection,
};
