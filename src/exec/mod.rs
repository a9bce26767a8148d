// src/exec/mod.rs

//! Process execution layer.
//!
//! Runs the configured command with `tokio::process::Command`, blocking the
//! dispatch loop until the child exits. There is no executor pool: one
//! qualifying event means one synchronous run, and nothing else happens in
//! the meantime.

pub mod runner;

pub use runner::{run_command, split_command, RunRecord};
