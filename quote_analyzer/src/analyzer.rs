//! Quote analyzer for a single symbol.
//!
//! `QuoteAnalyzer` owns its two collaborators and the most recent quote. It has two
//! states: without a quote every derived accessor fails with
//! [`QuoteError::InvalidAnalysisState`]; after a refresh that delivered a quote the
//! accessors report that quote's fields. A refresh that delivers no data moves the
//! analyzer back to the first state.
use log::{debug, warn};
use quote_common::{Quote, QuoteError, Result, SymbolRule};

use crate::audio::{AudioCue, AudioFeedback};
use crate::movement::Movement;
use crate::source::QuoteSource;

/// Round `value` to two decimal places.
///
/// Rounding works on the exact decimal expansion of the binary value, so a value
/// stored just below a half cent (1.115 is really 1.11499...) rounds down. Exact
/// ties go to the even cent.
pub fn round_to_cents(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Analyzer of the latest quote for one symbol.
pub struct QuoteAnalyzer {
    symbol: String,
    source: Box<dyn QuoteSource>,
    audio: Box<dyn AudioFeedback>,
    latest_quote: Option<Quote>,
}

impl QuoteAnalyzer {
    /// Creates an analyzer for `symbol` using the default [`SymbolRule`].
    ///
    /// Fails with [`QuoteError::InvalidSymbol`] if the symbol is rejected.
    pub fn new(
        symbol: &str,
        source: impl QuoteSource + 'static,
        audio: impl AudioFeedback + 'static,
    ) -> Result<Self> {
        Self::builder(symbol).source(source).audio(audio).build()
    }

    /// Starts a builder for `symbol`.
    pub fn builder(symbol: &str) -> QuoteAnalyzerBuilder {
        QuoteAnalyzerBuilder {
            symbol: String::from(symbol),
            rule: SymbolRule::default(),
            source: None,
            audio: None,
        }
    }

    /// The symbol this analyzer was created for.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The quote stored by the last successful refresh, if it carried data.
    pub fn latest_quote(&self) -> Option<&Quote> {
        self.latest_quote.as_ref()
    }

    /// Fetch the current quote from the source and store it.
    ///
    /// Calls the source exactly once. On failure the stored quote is left untouched
    /// and [`QuoteError::TickerConnection`] is returned. On success the result
    /// replaces the stored quote, even when the source had no data.
    pub fn refresh(&mut self) -> Result<()> {
        match self.source.current_quote(&self.symbol) {
            Ok(quote) => {
                debug!("Refreshed {}: {:?}", self.symbol, quote);
                self.latest_quote = quote;
                Ok(())
            }
            Err(source) => {
                warn!("Quote source failed for {}: {}", self.symbol, source);
                Err(QuoteError::TickerConnection {
                    symbol: self.symbol.clone(),
                    source,
                })
            }
        }
    }

    /// Previous close of the stored quote.
    pub fn previous_close(&self) -> Result<f64> {
        Ok(self.quote()?.previous_close)
    }

    /// Last trade of the stored quote.
    pub fn current_price(&self) -> Result<f64> {
        Ok(self.quote()?.last_trade)
    }

    /// Change since close exactly as delivered by the source.
    pub fn change_since_close(&self) -> Result<f64> {
        Ok(self.quote()?.change)
    }

    /// `change / previous_close * 100`, rounded to two decimal places.
    ///
    /// Fails with [`QuoteError::ZeroPreviousClose`] rather than returning an
    /// infinite or NaN percentage.
    pub fn percent_change_since_close(&self) -> Result<f64> {
        let quote = self.quote()?;
        if quote.previous_close == 0.0 {
            return Err(QuoteError::ZeroPreviousClose(self.symbol.clone()));
        }
        Ok(round_to_cents(quote.change / quote.previous_close * 100.0))
    }

    /// Play the happy or sad sound depending on the percent change.
    ///
    /// Plays at most one sound and never the error sound. Returns the movement
    /// the decision was based on.
    pub fn play_appropriate_audio(&mut self) -> Result<Movement> {
        let movement = Movement::classify(self.percent_change_since_close()?);
        if let Some(cue) = movement.cue() {
            debug!("Playing {} for {} ({})", cue, self.symbol, movement);
            self.audio.play(cue);
        }
        Ok(movement)
    }

    /// Play the error sound.
    ///
    /// The analyzer never does this on its own; it is meant for callers reacting to
    /// a failed [`Self::refresh`].
    pub fn play_error_audio(&mut self) {
        self.audio.play(AudioCue::Error);
    }

    fn quote(&self) -> Result<&Quote> {
        self.latest_quote
            .as_ref()
            .ok_or_else(|| QuoteError::InvalidAnalysisState(self.symbol.clone()))
    }
}

/// Step-by-step construction of a [`QuoteAnalyzer`].
///
/// Both collaborators are required; `build` reports the first one that was never
/// supplied as [`QuoteError::MissingDependency`].
pub struct QuoteAnalyzerBuilder {
    symbol: String,
    rule: SymbolRule,
    source: Option<Box<dyn QuoteSource>>,
    audio: Option<Box<dyn AudioFeedback>>,
}

impl QuoteAnalyzerBuilder {
    /// Replace the default symbol rule.
    pub fn rule(mut self, rule: SymbolRule) -> Self {
        self.rule = rule;
        self
    }

    /// Set the quote source.
    pub fn source(mut self, source: impl QuoteSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Set an already boxed quote source.
    pub fn boxed_source(mut self, source: Box<dyn QuoteSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the audio feedback.
    pub fn audio(mut self, audio: impl AudioFeedback + 'static) -> Self {
        self.audio = Some(Box::new(audio));
        self
    }

    /// Validate the symbol and assemble the analyzer.
    ///
    /// The symbol is checked first, so a rejected symbol is reported even when a
    /// collaborator is missing as well.
    pub fn build(self) -> Result<QuoteAnalyzer> {
        self.rule.validate(&self.symbol)?;
        let source = self
            .source
            .ok_or(QuoteError::MissingDependency("quote source"))?;
        let audio = self
            .audio
            .ok_or(QuoteError::MissingDependency("audio feedback"))?;

        Ok(QuoteAnalyzer {
            symbol: self.symbol,
            source,
            audio,
            latest_quote: None,
        })
    }
}
