//! Acceptance rule for stock symbols.
//!
//! Exchanges disagree on what a valid symbol looks like, so the rule is a value
//! rather than a constant: callers can widen or narrow it. The default accepts
//! short upper-case style symbols such as `GM`, `BRK.B` or `RDS-A`.
use crate::{QuoteError, Result};

/// Longest symbol accepted by [`SymbolRule::default`].
pub const DEFAULT_MAX_SYMBOL_LEN: usize = 8;

/// Configurable predicate deciding whether a symbol is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRule {
    /// Maximum number of characters.
    pub max_len: usize,
    /// Punctuation allowed besides ASCII letters and digits.
    pub extra_chars: Vec<char>,
}

impl Default for SymbolRule {
    fn default() -> Self {
        SymbolRule {
            max_len: DEFAULT_MAX_SYMBOL_LEN,
            extra_chars: vec!['.', '-'],
        }
    }
}

impl SymbolRule {
    /// Default rule with a different maximum length.
    pub fn with_max_len(max_len: usize) -> Self {
        SymbolRule {
            max_len,
            ..Self::default()
        }
    }

    /// Checks `symbol` against the rule.
    ///
    /// Returns [`QuoteError::InvalidSymbol`] describing the first violation found.
    pub fn validate(&self, symbol: &str) -> Result<()> {
        let invalid = |reason: String| QuoteError::InvalidSymbol {
            symbol: String::from(symbol),
            reason,
        };

        if symbol.is_empty() {
            return Err(invalid(String::from("symbol is empty")));
        }

        let len = symbol.chars().count();
        if len > self.max_len {
            return Err(invalid(format!(
                "{} characters exceeds the maximum of {}",
                len, self.max_len
            )));
        }

        if let Some(c) = symbol
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && !self.extra_chars.contains(c))
        {
            return Err(invalid(format!("character {:?} is not allowed", c)));
        }

        Ok(())
    }

    /// Convenience wrapper around [`Self::validate`].
    pub fn accepts(&self, symbol: &str) -> bool {
        self.validate(symbol).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_accepts_common_symbols() {
        let rule = SymbolRule::default();
        for symbol in ["A", "GM", "AA", "BXC", "CAJ", "DIS", "ELF", "BRK.B", "RDS-A", "ABCDEFGH"] {
            assert!(rule.accepts(symbol), "{symbol} should be accepted");
        }
    }

    #[test]
    fn nine_characters_is_too_long() {
        let err = SymbolRule::default().validate("ZZZZZZZZZ").unwrap_err();
        assert!(matches!(err, QuoteError::InvalidSymbol { ref symbol, .. } if symbol == "ZZZZZZZZZ"));
    }

    #[test]
    fn empty_and_odd_characters_are_rejected() {
        let rule = SymbolRule::default();
        assert!(!rule.accepts(""));
        assert!(!rule.accepts("G M"));
        assert!(!rule.accepts("GM$"));
    }

    #[test]
    fn max_len_is_configurable() {
        assert!(SymbolRule::with_max_len(9).accepts("ZZZZZZZZZ"));
        assert!(!SymbolRule::with_max_len(2).accepts("BXC"));
    }
}
