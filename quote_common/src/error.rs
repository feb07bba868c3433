//! Error types shared across the workspace.
//!
//! The `QuoteError` enum unifies the analyzer's own failure conditions with the
//! I/O, serialization and channel failures raised by the ticker binary, so every
//! crate can propagate a single error type and callers can match on the variant.
use std::io;

use thiserror::Error;

/// Boxed error returned by quote sources.
///
/// Sources are free to fail with any error type; the analyzer wraps it into
/// [`QuoteError::TickerConnection`].
pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

/// Unified error type for the analyzer and the ticker binary.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The symbol was rejected by the configured `SymbolRule`.
    #[error("Invalid stock symbol {symbol:?}: {reason}")]
    InvalidSymbol {
        /// The rejected symbol, as given.
        symbol: String,
        /// Which part of the rule it broke.
        reason: String,
    },

    /// A collaborator was never supplied to the analyzer builder.
    #[error("Missing dependency: {0}")]
    MissingDependency(&'static str),

    /// The quote source failed to deliver a quote.
    #[error("Ticker connection error for {symbol}: {source}")]
    TickerConnection {
        /// Symbol that was being refreshed.
        symbol: String,
        /// Underlying source failure.
        #[source]
        source: SourceError,
    },

    /// A derived value was requested while no quote is held.
    #[error("Invalid analysis state: no quote available for {0}")]
    InvalidAnalysisState(String),

    /// Percent change is undefined because the previous close is zero.
    #[error("Numeric error: previous close of {0} is zero")]
    ZeroPreviousClose(String),

    /// A setting of the ticker is out of range or inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error originating from the standard library or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// A replay file has no quotes left.
    #[error("Replay exhausted after {0} quotes")]
    ReplayExhausted(usize),

    /// A source produced a quote for another symbol than requested.
    #[error("Quote for {actual} does not match requested symbol {expected}")]
    SymbolMismatch {
        /// Symbol the analyzer asked for.
        expected: String,
        /// Symbol found in the quote.
        actual: String,
    },
}
