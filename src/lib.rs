// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod exec;
pub mod logging;
pub mod watch;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::WatchConfig;
use crate::engine::{LoopEvent, WatchLoop};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - configuration from CLI arguments
/// - the recursive file watcher
/// - Ctrl-C handling
/// - the dispatch loop
///
/// Returns only on shutdown (Ctrl-C) or a fatal error; under normal
/// operation the loop runs until externally interrupted.
pub async fn run(args: CliArgs) -> Result<()> {
    let config = WatchConfig::from_cli(&args)?;
    debug!(?config, "configuration built");

    let (events_tx, events_rx) = mpsc::unbounded_channel::<LoopEvent>();

    // Registering the watch fails fast if the path is missing or
    // inaccessible, before anything is printed.
    let _watcher_handle = watch::spawn_watcher(&config.root, events_tx.clone())?;

    println!(
        "==> Start monitoring {} (type c^c to exit)",
        config.root.display()
    );

    // Ctrl-C → graceful shutdown.
    {
        let tx = events_tx;
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(LoopEvent::ShutdownRequested);
        });
    }

    WatchLoop::new(config, events_rx).run().await
}
