//! Miscellaneous helper utilities.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize `tracing` subscriber with env-based filter.
///
/// If `RUST_LOG` is not set, defaults to `info` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Round to `decimals` fractional digits, half away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Round a token or ETH amount to 6 decimal digits.
pub fn round_token(value: f64) -> f64 {
    round_to(value, 6)
}

/// Round a fiat amount to 2 decimal digits.
pub fn round_fiat(value: f64) -> f64 {
    round_to(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(2.4, 0), 2.0);
    }

    #[test]
    fn token_rounding_is_six_digits() {
        assert_eq!(round_token(999.999_999_999_999_9), 1000.0);
        assert_eq!(round_token(1.234_567_8), 1.234_568);
        assert_eq!(round_token(0.900_000_000_000_000_1), 0.9);
    }

    #[test]
    fn fiat_rounding_is_two_digits() {
        assert_eq!(round_fiat(6.929_999), 6.93);
        assert_eq!(round_fiat(-2.006), -2.01);
    }
}
