//! Quote source collaborator.
use quote_common::{Quote, SourceError};

/// Anything able to deliver the latest quote for a symbol.
///
/// `Ok(None)` is a valid answer meaning no data is currently available; it is not
/// a failure. Transport problems are reported as `Err` and surface from
/// [`crate::QuoteAnalyzer::refresh`] as a ticker connection error.
pub trait QuoteSource {
    /// Fetch the current quote for `symbol`.
    fn current_quote(&mut self, symbol: &str) -> Result<Option<Quote>, SourceError>;
}

impl<F> QuoteSource for F
where
    F: FnMut(&str) -> Result<Option<Quote>, SourceError>,
{
    fn current_quote(&mut self, symbol: &str) -> Result<Option<Quote>, SourceError> {
        self(symbol)
    }
}
