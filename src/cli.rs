// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `autocompile`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "autocompile",
    version,
    about = "Watch a directory tree and run a command on every matching modification.",
    long_about = None
)]
pub struct CliArgs {
    /// Directory to watch, recursively.
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Comma-separated list of path suffixes, e.g. `.tex,.bib`.
    ///
    /// A file modification only triggers the command when the changed path
    /// ends with one of these suffixes (exact trailing match, no globs).
    #[arg(value_name = "EXTENSIONS")]
    pub extensions: String,

    /// Command to run on each qualifying modification.
    ///
    /// Split on whitespace before spawning; shell quoting is not supported,
    /// so arguments with embedded spaces cannot be passed through.
    #[arg(value_name = "CMD", default_value = "make")]
    pub cmd: String,

    /// Keep watching when the command fails to spawn (e.g. not found).
    ///
    /// Without this flag a spawn failure stops the watcher with a non-zero
    /// exit, matching the reference behaviour. A non-zero exit *status* of
    /// the spawned command is never an error either way.
    #[arg(long)]
    pub keep_going: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `AUTOCOMPILE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Parse arguments, exiting on usage errors.
///
/// clap exits with status 2 on usage errors by default; the historical
/// contract for this tool is status 1 when required arguments are missing,
/// so usage errors are remapped here. `--help`/`--version` still exit 0.
pub fn parse() -> CliArgs {
    CliArgs::try_parse().unwrap_or_else(|err| {
        let code = if err.use_stderr() { 1 } else { 0 };
        let _ = err.print();
        std::process::exit(code);
    })
}
