//! Command-line arguments for the quote ticker.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use quote_common::symbol::DEFAULT_MAX_SYMBOL_LEN;
use strum::Display;

/// Where quotes come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase")]
pub enum SourceKind {
    /// Random walk around `--start-price`.
    Synthetic,
    /// JSON-lines file given with `--quotes`.
    Replay,
}

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Stock symbol to follow.
    #[clap(long, short)]
    pub symbol: String,

    /// Quote source to poll.
    #[clap(long, value_enum, default_value_t = SourceKind::Synthetic)]
    pub source: SourceKind,

    /// Replay file with one JSON quote (or `null`) per line.
    #[clap(long, required_if_eq("source", "replay"))]
    pub quotes: Option<PathBuf>,

    /// Delay between two refreshes, in milliseconds.
    #[clap(long, default_value_t = 1000)]
    pub interval_ms: u64,

    /// Stop after this many refreshes instead of running until Ctrl+C.
    #[clap(long)]
    pub max_refreshes: Option<usize>,

    /// Longest symbol accepted.
    #[clap(long, default_value_t = DEFAULT_MAX_SYMBOL_LEN)]
    pub max_symbol_len: usize,

    /// Previous close used by the synthetic source.
    #[clap(long, default_value_t = 100.0)]
    pub start_price: f64,

    /// Largest move per refresh of the synthetic source, in percent.
    #[clap(long, default_value_t = 1.0)]
    pub step_pct: f64,

    /// Do not ring the terminal bell when a sound is played.
    #[clap(long)]
    pub no_bell: bool,
}
