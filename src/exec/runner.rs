// src/exec/runner.rs

use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local};
use tokio::process::Command;
use tracing::debug;

/// Timestamps and outcome of one command run.
///
/// Printed inline around the run and then discarded; nothing is retained
/// across runs. `exit_status` is `None` when the child was terminated by a
/// signal rather than exiting.
#[derive(Debug, Clone, Copy)]
pub struct RunRecord {
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
    pub exit_status: Option<i32>,
}

/// Split a command line into program and arguments on whitespace.
///
/// Shell quoting is deliberately not supported: `echo "a b"` becomes the
/// three tokens `echo`, `"a`, `b"`. Returns an error for an empty or
/// all-whitespace command.
pub fn split_command(command: &str) -> Result<(String, Vec<String>)> {
    let mut tokens = command.split_whitespace().map(str::to_string);
    let Some(program) = tokens.next() else {
        bail!("empty command");
    };
    Ok((program, tokens.collect()))
}

/// Run the configured command once, synchronously, in `cwd`.
///
/// Prints the `==> Modification detected` / `==> Autocompile done` progress
/// lines around the run. The child inherits the parent's standard streams,
/// so its output lands directly on the console. A non-zero exit status of
/// the child is not an error; a failure to spawn it is.
pub async fn run_command(command: &str, cwd: &Path) -> Result<RunRecord> {
    let (program, args) = split_command(command)?;

    let started_at = Local::now();
    println!("==> Modification detected - {}", format_timestamp(&started_at));

    let mut child = Command::new(&program)
        .args(&args)
        .current_dir(cwd)
        .spawn()
        .with_context(|| format!("spawning command {command:?} in {cwd:?}"))?;

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for command {command:?}"))?;

    debug!(
        command,
        exit_code = status.code(),
        success = status.success(),
        "command exited"
    );

    let finished_at = Local::now();
    println!("==> Autocompile done - {}", format_timestamp(&finished_at));

    Ok(RunRecord {
        started_at,
        finished_at,
        exit_status: status.code(),
    })
}

/// Microsecond-precision local timestamp, e.g. `2026-08-30 14:03:07.123456`.
fn format_timestamp(ts: &DateTime<Local>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}
