// src/engine/runtime.rs

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::WatchConfig;
use crate::exec::run_command;
use crate::watch::{qualifies, ChangeEvent};

/// Events sent into the dispatch loop from the watcher or the Ctrl-C handler.
#[derive(Debug, Clone)]
pub enum LoopEvent {
    Changed(ChangeEvent),
    ShutdownRequested,
}

/// The single-threaded dispatch loop.
///
/// Pulls events off the channel one at a time; while a command runs, the
/// loop is suspended on it and further events simply buffer in the channel,
/// to be handled in order once the command has finished. At most one command
/// execution is ever in flight. There is no coalescing of buffered events.
pub struct WatchLoop {
    config: WatchConfig,
    events_rx: mpsc::UnboundedReceiver<LoopEvent>,
}

impl WatchLoop {
    pub fn new(config: WatchConfig, events_rx: mpsc::UnboundedReceiver<LoopEvent>) -> Self {
        Self { config, events_rx }
    }

    /// Main event loop.
    ///
    /// Runs until a shutdown is requested or the event channel closes. The
    /// closed-channel exit is what makes this testable: feed a finite event
    /// sequence through the sender, drop it, and the loop drains and returns.
    pub async fn run(mut self) -> Result<()> {
        info!("dispatch loop started");

        while let Some(event) = self.events_rx.recv().await {
            match event {
                LoopEvent::Changed(change) => self.handle_change(change).await?,
                LoopEvent::ShutdownRequested => {
                    info!("shutdown requested, stopping dispatch loop");
                    break;
                }
            }
        }

        info!("dispatch loop exiting");
        Ok(())
    }

    /// Filter one change event and run the command if it qualifies.
    async fn handle_change(&self, change: ChangeEvent) -> Result<()> {
        if !qualifies(&change, &self.config.suffixes) {
            debug!(path = ?change.path, kind = ?change.kind, "event does not qualify");
            return Ok(());
        }

        debug!(path = ?change.path, "qualifying modification, running command");

        match run_command(&self.config.command, &self.config.root).await {
            Ok(record) => {
                debug!(exit_code = ?record.exit_status, "run finished");
                Ok(())
            }
            Err(err) if self.config.keep_going => {
                warn!(error = %err, "command failed to run, continuing to watch");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}
