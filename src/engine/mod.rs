// src/engine/mod.rs

//! Dispatch loop for autocompile.
//!
//! This module ties together:
//! - the filesystem watcher feeding [`LoopEvent`]s into a channel
//! - the suffix filter deciding which changes qualify
//! - the runner executing the command, one run at a time
//! - shutdown signals (Ctrl-C)

pub mod runtime;

pub use runtime::{LoopEvent, WatchLoop};
