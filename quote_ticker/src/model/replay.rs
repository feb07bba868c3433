//! Replay quote source.
//!
//! Reads a JSON-lines file where each non-empty line is either a quote object or
//! `null` for "no data", and serves the lines in order, one per fetch:
//!
//! ```text
//! {"symbol":"GM","previous_close":100.0,"last_trade":101.0,"change":1.0}
//! null
//! {"symbol":"GM","previous_close":100.0,"last_trade":98.5,"change":-1.5}
//! ```

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;
use quote_analyzer::QuoteSource;
use quote_common::{Quote, QuoteError, Result, SourceError};

/// Quote source playing back a recorded session.
pub struct ReplaySource {
    quotes: VecDeque<Option<Quote>>,
    served: usize,
}

impl ReplaySource {
    /// Parses all lines from a buffered reader.
    ///
    /// Blank lines are skipped; any other line that is not a quote or `null` fails
    /// the whole load.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut quotes = VecDeque::new();

        for line_result in reader.lines() {
            let line = line_result?;
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() {
                continue;
            }
            quotes.push_back(serde_json::from_str::<Option<Quote>>(trimmed_line)?);
        }
        Ok(ReplaySource { quotes, served: 0 })
    }

    /// Opens and parses a replay file.
    pub fn open(path: &Path) -> Result<Self> {
        let source = Self::from_reader(BufReader::new(File::open(path)?))?;
        info!("Loaded {} replay entries from {}", source.remaining(), path.display());
        Ok(source)
    }

    /// Entries not served yet.
    pub fn remaining(&self) -> usize {
        self.quotes.len()
    }
}

impl QuoteSource for ReplaySource {
    fn current_quote(&mut self, symbol: &str) -> Result<Option<Quote>, SourceError> {
        let entry = self
            .quotes
            .pop_front()
            .ok_or(QuoteError::ReplayExhausted(self.served))?;
        self.served += 1;

        match entry {
            Some(quote) if !quote.symbol.eq_ignore_ascii_case(symbol) => {
                Err(Box::new(QuoteError::SymbolMismatch {
                    expected: String::from(symbol),
                    actual: quote.symbol,
                }))
            }
            entry => Ok(entry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SESSION: &str = r#"
{"symbol":"GM","previous_close":100.0,"last_trade":101.0,"change":1.0}

null
{"symbol":"gm","previous_close":100.0,"last_trade":98.5,"change":-1.5}
"#;

    #[test]
    fn serves_entries_in_order() {
        let mut source = ReplaySource::from_reader(Cursor::new(SESSION)).unwrap();
        assert_eq!(source.remaining(), 3);

        let first = source.current_quote("GM").unwrap().unwrap();
        assert_eq!(first.last_trade, 101.0);
        assert!(source.current_quote("GM").unwrap().is_none());
        let third = source.current_quote("GM").unwrap().unwrap();
        assert_eq!(third.change, -1.5);
    }

    #[test]
    fn exhausted_replay_is_a_failure() {
        let mut source = ReplaySource::from_reader(Cursor::new("null\n")).unwrap();
        source.current_quote("GM").unwrap();
        let err = source.current_quote("GM").unwrap_err();
        assert_eq!(err.to_string(), QuoteError::ReplayExhausted(1).to_string());
    }

    #[test]
    fn other_symbols_are_rejected() {
        let mut source = ReplaySource::from_reader(Cursor::new(SESSION)).unwrap();
        let err = source.current_quote("DIS").unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn malformed_line_fails_the_load() {
        let result = ReplaySource::from_reader(Cursor::new("{\"symbol\":\"GM\"}\n"));
        assert!(matches!(result, Err(QuoteError::SerdeJson(_))));
    }
}
