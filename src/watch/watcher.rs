// src/watch/watcher.rs

use std::path::PathBuf;

use anyhow::{Context, Result};
use notify::event::ModifyKind;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::debug;

use crate::engine::LoopEvent;
use crate::watch::filter::{ChangeEvent, ChangeKind};

/// Handle for the filesystem watcher.
///
/// This exists mainly so the underlying `RecommendedWatcher` is kept alive
/// for as long as needed. Dropping this handle will stop file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Register a recursive filesystem watch on `root` and forward every change
/// as a [`LoopEvent::Changed`] into the dispatch loop's channel.
///
/// Recursive mode means subdirectories created after startup are picked up
/// automatically without re-registering. Fails if `root` does not exist or
/// is not accessible; callers are expected to treat that as fatal before
/// entering the loop.
pub fn spawn_watcher(
    root: impl Into<PathBuf>,
    events_tx: mpsc::UnboundedSender<LoopEvent>,
) -> Result<WatcherHandle> {
    let root = root.into();

    // Closure called synchronously by notify whenever an event arrives.
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                let kind = change_kind(&event.kind);
                for path in event.paths {
                    let change = ChangeEvent::new(path, kind);
                    if events_tx.send(LoopEvent::Changed(change)).is_err() {
                        // Loop is gone; nothing useful left to do here.
                        return;
                    }
                }
            }
            Err(err) => {
                eprintln!("autocompile: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    watcher
        .watch(&root, RecursiveMode::Recursive)
        .with_context(|| format!("watching path {:?}", root))?;

    debug!("file watcher started on {:?}", root);

    Ok(WatcherHandle { _inner: watcher })
}

/// Collapse notify's event taxonomy into the two kinds the filter handles.
///
/// Only data modifications count as `Modify`. Metadata changes (chmod,
/// utime) and renames also arrive under `EventKind::Modify`, but must not
/// trigger a run. `ModifyKind::Any` is kept for backends that cannot say
/// more precisely what changed.
pub fn change_kind(kind: &EventKind) -> ChangeKind {
    match kind {
        EventKind::Modify(ModifyKind::Data(_) | ModifyKind::Any) => ChangeKind::Modify,
        _ => ChangeKind::Other,
    }
}
