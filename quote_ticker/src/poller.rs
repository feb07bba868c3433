//! Polling loop driving a `QuoteAnalyzer`.
//!
//! One iteration per tick: refresh, log the quote and its percent change, then play
//! the matching sound. A failed refresh is logged and answered with the error sound;
//! the loop keeps going. The loop ends on a shutdown signal, when the tick channel
//! closes, or after the configured number of refreshes.
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{Receiver, select};
use log::{error, info, warn};
use quote_analyzer::QuoteAnalyzer;
use quote_common::{QuoteError, Result};

/// Counters collected while polling.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PollSummary {
    /// Refresh attempts, successful or not.
    pub refreshes: usize,
    /// Refreshes that failed with a ticker connection error.
    pub failures: usize,
    /// Refreshes where the source had no data.
    pub empty: usize,
    /// Time of the last successful refresh.
    pub last_refreshed: Option<DateTime<Utc>>,
}

/// Poll `analyzer` on every tick until stopped.
///
/// Only errors other than connection failures, missing data or an undefined
/// percent change abort the loop.
pub fn run(
    analyzer: &mut QuoteAnalyzer,
    ticks: Receiver<Instant>,
    shutdown: Receiver<()>,
    max_refreshes: Option<usize>,
) -> Result<PollSummary> {
    let mut summary = PollSummary::default();

    loop {
        if max_refreshes.is_some_and(|max| summary.refreshes >= max) {
            info!("Reached {} refreshes, stopping", summary.refreshes);
            break;
        }

        select! {
            recv(shutdown) -> _ => break,
            recv(ticks) -> msg => match msg {
                Ok(_) => poll_once(analyzer, &mut summary)?,
                Err(_) => break,
            }
        }
    }
    Ok(summary)
}

/// One refresh → report → play cycle.
pub fn poll_once(analyzer: &mut QuoteAnalyzer, summary: &mut PollSummary) -> Result<()> {
    summary.refreshes += 1;

    match analyzer.refresh() {
        Ok(()) => {
            let now = Utc::now();
            summary.last_refreshed = Some(now);
            report(analyzer, summary, now)
        }
        Err(e @ QuoteError::TickerConnection { .. }) => {
            summary.failures += 1;
            error!("{}", e);
            analyzer.play_error_audio();
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn report(analyzer: &mut QuoteAnalyzer, summary: &mut PollSummary, at: DateTime<Utc>) -> Result<()> {
    let Some(quote) = analyzer.latest_quote().cloned() else {
        summary.empty += 1;
        warn!("{}: no quote data at {}", analyzer.symbol(), at.format("%H:%M:%S%.3f"));
        return Ok(());
    };

    match analyzer.play_appropriate_audio() {
        Ok(movement) => {
            let percent = analyzer.percent_change_since_close()?;
            info!(
                "{} {} Close={:.2} Last={:.2} Change={:+.2} ({:+.2}%) {}",
                at.format("%H:%M:%S%.3f"),
                quote.symbol,
                quote.previous_close,
                quote.last_trade,
                quote.change,
                percent,
                movement
            );
            Ok(())
        }
        Err(e @ QuoteError::ZeroPreviousClose(_)) => {
            warn!("{}", e);
            Ok(())
        }
        Err(e) => Err(e),
    }
}
