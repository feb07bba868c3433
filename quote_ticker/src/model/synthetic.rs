//! Synthetic quote source.
//!
//! The previous close is fixed for the whole session and every fetch moves the last
//! trade by a small random step, so successive refreshes drift like a quiet market.

use log::debug;
use quote_analyzer::QuoteSource;
use quote_common::{Quote, QuoteError, Result, SourceError};
use rand::Rng;

/// Settings of the random walk.
#[derive(Debug, Clone)]
pub struct SyntheticConfig {
    /// Previous close, also the first price of the walk.
    pub start_price: f64,
    /// Largest move per fetch, in percent of the current price.
    pub step_pct: f64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        SyntheticConfig {
            start_price: 100.0,
            step_pct: 1.0,
        }
    }
}

/// Random-walk quote source.
pub struct SyntheticSource {
    previous_close: f64,
    last_trade: f64,
    step: f64,
}

impl SyntheticSource {
    /// Create a source starting at `config.start_price`.
    ///
    /// The start price must be finite and positive, the step finite and below
    /// 100 percent in either direction.
    pub fn new(config: &SyntheticConfig) -> Result<Self> {
        if !config.start_price.is_finite() || config.start_price <= 0.0 {
            return Err(QuoteError::InvalidConfig(format!(
                "start price must be a positive number, got {}",
                config.start_price
            )));
        }
        if !config.step_pct.is_finite() || config.step_pct.abs() >= 100.0 {
            return Err(QuoteError::InvalidConfig(format!(
                "step must be below 100 percent, got {}",
                config.step_pct
            )));
        }

        Ok(SyntheticSource {
            previous_close: config.start_price,
            last_trade: config.start_price,
            step: config.step_pct.abs() / 100.0,
        })
    }

    /// Calculate the next synthetic price using a small random walk around `current_price`.
    ///
    /// The change is sampled uniformly from `[-step, +step)` and the result is
    /// clamped to a minimum positive value to avoid non-sensical zero/negative prices.
    pub fn next_price(current_price: f64, step: f64) -> f64 {
        let change = if step > 0.0 {
            rand::rng().random_range(-step..step)
        } else {
            0.0
        };
        (current_price * (1.0 + change)).max(0.01)
    }
}

impl QuoteSource for SyntheticSource {
    fn current_quote(&mut self, symbol: &str) -> Result<Option<Quote>, SourceError> {
        self.last_trade = Self::next_price(self.last_trade, self.step);
        let quote = Quote::new(
            symbol,
            self.previous_close,
            self.last_trade,
            self.last_trade - self.previous_close,
        );
        debug!("Synthetic quote: {:?}", quote);
        Ok(Some(quote))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_close_stays_fixed() {
        let mut source = SyntheticSource::new(&SyntheticConfig::default()).unwrap();
        for _ in 0..50 {
            let quote = source.current_quote("GM").unwrap().unwrap();
            assert_eq!(quote.symbol, "GM");
            assert_eq!(quote.previous_close, 100.0);
            assert!(quote.last_trade > 0.0);
            assert_eq!(quote.change, quote.last_trade - quote.previous_close);
        }
    }

    #[test]
    fn price_never_drops_below_a_cent() {
        for _ in 0..100 {
            assert!(SyntheticSource::next_price(0.01, 0.5) >= 0.01);
        }
    }

    #[test]
    fn zero_step_keeps_the_price() {
        let config = SyntheticConfig {
            start_price: 42.0,
            step_pct: 0.0,
        };
        let mut source = SyntheticSource::new(&config).unwrap();
        let quote = source.current_quote("GM").unwrap().unwrap();
        assert_eq!(quote.last_trade, 42.0);
        assert_eq!(quote.change, 0.0);
    }

    #[test]
    fn rejects_unusable_settings() {
        let bad = [
            (f64::NAN, 1.0),
            (0.0, 1.0),
            (-5.0, 1.0),
            (f64::INFINITY, 1.0),
            (100.0, f64::INFINITY),
            (100.0, f64::NAN),
            (100.0, 100.0),
        ];
        for (start_price, step_pct) in bad {
            let config = SyntheticConfig {
                start_price,
                step_pct,
            };
            assert!(
                matches!(SyntheticSource::new(&config), Err(QuoteError::InvalidConfig(_))),
                "start {start_price} step {step_pct}"
            );
        }
    }

    #[test]
    fn steps_stay_within_bounds() {
        for _ in 0..100 {
            let next = SyntheticSource::next_price(100.0, 0.01);
            assert!((99.0..101.0).contains(&next), "{next}");
        }
    }
}
