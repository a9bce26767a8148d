// src/config.rs

//! Per-watch configuration.
//!
//! The whole configuration comes from positional CLI arguments; there is no
//! config file. `WatchConfig` is built once at startup and stays immutable
//! for the process lifetime.

use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::cli::CliArgs;

/// Immutable configuration for one watch session.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Directory to watch recursively; also the working directory for the
    /// spawned command.
    pub root: PathBuf,

    /// Path suffixes that qualify a modification, e.g. `[".tex", ".bib"]`.
    pub suffixes: Vec<String>,

    /// Command line to run, split on whitespace at spawn time.
    pub command: String,

    /// If true, a spawn failure is logged and the watch continues instead of
    /// stopping the process.
    pub keep_going: bool,
}

impl WatchConfig {
    /// Build the configuration from parsed CLI arguments.
    pub fn from_cli(args: &CliArgs) -> Result<Self> {
        if args.cmd.trim().is_empty() {
            bail!("command must not be empty");
        }

        Ok(Self {
            root: PathBuf::from(&args.path),
            suffixes: parse_suffixes(&args.extensions),
            command: args.cmd.clone(),
            keep_going: args.keep_going,
        })
    }
}

/// Split the comma-separated extensions argument into suffixes.
///
/// Mirrors the historical behaviour exactly: split on `,`, no trimming, no
/// de-duplication, no validation of suffix shape.
pub fn parse_suffixes(extensions: &str) -> Vec<String> {
    extensions.split(',').map(str::to_string).collect()
}
