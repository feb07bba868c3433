//!
//! Common types shared by the quote analyzer and the ticker binary.
//!
//! This crate aggregates:
//! - `error`: unified error type `QuoteError` used across the workspace.
//! - `result`: handy `Result<T, QuoteError>` alias.
//! - `quote`: the `Quote` value object delivered by quote sources.
//! - `symbol`: the configurable `SymbolRule` deciding which symbols are accepted.
#![warn(missing_docs)]
pub mod error;
pub mod quote;
pub mod result;
pub mod symbol;

pub use error::{QuoteError, SourceError};
pub use quote::Quote;
pub use result::Result;
pub use symbol::SymbolRule;
