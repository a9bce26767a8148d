// src/watch/mod.rs

//! File watching and event qualification.
//!
//! This module is responsible for:
//! - Wiring up a cross-platform filesystem watcher (`notify`) that covers
//!   the root recursively, including directories created after startup.
//! - Turning raw notify events into [`ChangeEvent`]s.
//! - Deciding which events qualify for a command run (suffix match).
//!
//! It does **not** run anything itself; it only feeds the dispatch loop.

pub mod filter;
pub mod watcher;

pub use filter::{qualifies, ChangeEvent, ChangeKind};
pub use watcher::{change_kind, spawn_watcher, WatcherHandle};
