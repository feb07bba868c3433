//! Quote Ticker: follows one stock symbol from the command line, printing every
//! refreshed quote and playing a sound when the price has moved at least one percent
//! since the previous close.
//!
//! Usage example (CLI):
//! ```bash
//! quote_ticker --symbol GM --interval-ms 500 --max-refreshes 20
//! quote_ticker --symbol GM --source replay --quotes ./session.jsonl
//! ```
//!
//! Wiring:
//! - a `QuoteSource` (synthetic random walk or replay file, see `model`),
//! - a `ConsolePlayer` thread rendering audio cues (see `player`),
//! - a `QuoteAnalyzer` owning both,
//! - the polling loop in `poller`, ticking with `crossbeam_channel::tick` and stopped
//!   by Ctrl+C or `--max-refreshes`.
#![warn(missing_docs)]
mod args;
mod model;
mod player;
mod poller;

use std::io;
use std::time::Duration;

use crate::args::{Args, SourceKind};
use crate::model::replay::ReplaySource;
use crate::model::synthetic::{SyntheticConfig, SyntheticSource};
use crate::player::ConsolePlayer;
use clap::Parser;
use crossbeam_channel::{bounded, tick};
use log::{error, info};
use quote_analyzer::{QuoteAnalyzer, QuoteSource};
use quote_common::{QuoteError, Result, SymbolRule};

fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let source = build_source(&args)?;
    let (audio, player) = ConsolePlayer::start(!args.no_bell);
    let mut analyzer = QuoteAnalyzer::builder(args.symbol.trim())
        .rule(SymbolRule::with_max_len(args.max_symbol_len))
        .boxed_source(source)
        .audio(audio)
        .build()?;

    let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Shutting down ticker...");
        let _ = shutdown_tx.try_send(());
    })
    .map_err(|e| QuoteError::Io(io::Error::other(e)))?;

    info!(
        "Following {} from the {} source every {} ms. Press Ctrl+C to exit.",
        analyzer.symbol(),
        args.source,
        args.interval_ms
    );
    let ticks = tick(Duration::from_millis(args.interval_ms.max(1)));
    let summary = poller::run(&mut analyzer, ticks, shutdown_rx, args.max_refreshes)?;
    info!(
        "Done: {} refreshes, {} failed, {} without data",
        summary.refreshes, summary.failures, summary.empty
    );

    drop(analyzer);
    if player.join().is_err() {
        error!("Audio player thread panicked");
    }
    Ok(())
}

fn build_source(args: &Args) -> Result<Box<dyn QuoteSource>> {
    match args.source {
        SourceKind::Synthetic => {
            let config = SyntheticConfig {
                start_price: args.start_price,
                step_pct: args.step_pct,
            };
            Ok(Box::new(SyntheticSource::new(&config)?))
        }
        SourceKind::Replay => {
            let path = args
                .quotes
                .as_deref()
                .ok_or_else(|| {
                    QuoteError::InvalidConfig(String::from("--source replay needs --quotes"))
                })?;
            Ok(Box::new(ReplaySource::open(path)?))
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_without_file_is_a_config_error() {
        let mut args = Args::parse_from(["quote_ticker", "--symbol", "GM"]);
        args.source = SourceKind::Replay;
        assert!(matches!(build_source(&args), Err(QuoteError::InvalidConfig(_))));
    }

    #[test]
    fn infinite_step_is_rejected_before_polling() {
        let args = Args::parse_from(["quote_ticker", "--symbol", "GM", "--step-pct", "inf"]);
        assert!(matches!(build_source(&args), Err(QuoteError::InvalidConfig(_))));
    }

    #[test]
    fn default_synthetic_source_builds() {
        let args = Args::parse_from(["quote_ticker", "--symbol", "GM"]);
        let mut source = build_source(&args).unwrap();
        assert!(source.current_quote("GM").unwrap().is_some());
    }
}
