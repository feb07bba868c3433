//!
//! Stock quote analysis for a single symbol.
//!
//! The crate is built around [`QuoteAnalyzer`], which pulls quotes from an injected
//! [`QuoteSource`], exposes the previous close, current price and change since close,
//! and asks an injected [`AudioFeedback`] to play a sound matching the day's movement.
//!
//! Modules:
//! - `source`: the `QuoteSource` collaborator trait.
//! - `audio`: the `AudioFeedback` collaborator trait and `AudioCue`.
//! - `movement`: classification of a percent change into up/down/flat.
//! - `analyzer`: `QuoteAnalyzer`, its builder and the percent-change rounding.
#![warn(missing_docs)]
pub mod analyzer;
pub mod audio;
pub mod movement;
pub mod source;

pub use analyzer::{QuoteAnalyzer, QuoteAnalyzerBuilder};
pub use audio::{AudioCue, AudioFeedback};
pub use movement::Movement;
pub use source::QuoteSource;
