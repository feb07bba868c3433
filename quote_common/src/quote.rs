//! Quote value object.
//!
//! A `Quote` is a snapshot of one symbol at a point in time: the previous close,
//! the last trade and the change since close. The change is taken as delivered by
//! the source and is never recomputed from the two prices.
use serde::{Deserialize, Serialize};

use crate::Result;

/// Market quote for a single symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Symbol identifier (e.g. `GM`).
    pub symbol: String,
    /// Closing price of the previous session.
    pub previous_close: f64,
    /// Last traded price.
    pub last_trade: f64,
    /// Change since the previous close, as reported by the source.
    pub change: f64,
}

impl Quote {
    /// Creates a new quote from its four fields.
    pub fn new(symbol: &str, previous_close: f64, last_trade: f64, change: f64) -> Self {
        Quote {
            symbol: String::from(symbol),
            previous_close,
            last_trade,
            change,
        }
    }

    /// Encode the quote to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_is_kept_verbatim() {
        // 1010 -> 500 is really -510, the source is trusted anyway
        let quote = Quote::new("DIS", 1010.0, 500.0, -42.0);
        assert_eq!(quote.change, -42.0);
    }

    #[test]
    fn json_uses_snake_case_fields() {
        let quote = Quote::new("AA", 100.0, 101.0, 1.0);
        let json = quote.to_json().unwrap();
        assert!(json.contains("\"previous_close\":100.0"));
        assert!(json.contains("\"last_trade\":101.0"));

        let parsed: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, quote);
    }
}
