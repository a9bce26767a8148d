use std::error::Error;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use autocompile::config::WatchConfig;
use autocompile::engine::{LoopEvent, WatchLoop};
use autocompile::watch::{ChangeEvent, ChangeKind};
use tempfile::tempdir;
use tokio::sync::mpsc;

type TestResult = Result<(), Box<dyn Error>>;

fn config(root: &Path, command: &str, keep_going: bool) -> WatchConfig {
    WatchConfig {
        root: root.to_path_buf(),
        suffixes: vec![".tex".to_string(), ".bib".to_string()],
        command: command.to_string(),
        keep_going,
    }
}

/// Drop a tiny script into `root` that appends one line to `runs.log` per
/// invocation, so tests can count how often the loop ran the command.
fn install_counter_script(root: &Path) -> TestResult {
    let script = root.join("count.sh");
    fs::write(&script, "#!/bin/sh\necho run >> runs.log\n")?;
    let mut perms = fs::metadata(&script)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&script, perms)?;
    Ok(())
}

fn run_count(root: &Path) -> usize {
    fs::read_to_string(root.join("runs.log"))
        .map(|s| s.lines().count())
        .unwrap_or(0)
}

#[tokio::test]
async fn one_qualifying_event_triggers_exactly_one_run() -> TestResult {
    let dir = tempdir()?;
    install_counter_script(dir.path())?;

    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(LoopEvent::Changed(ChangeEvent::new(
        dir.path().join("doc.tex"),
        ChangeKind::Modify,
    )))?;
    drop(tx);

    WatchLoop::new(config(dir.path(), "./count.sh", false), rx)
        .run()
        .await?;

    assert_eq!(run_count(dir.path()), 1);
    Ok(())
}

#[tokio::test]
async fn non_qualifying_events_trigger_nothing() -> TestResult {
    let dir = tempdir()?;
    install_counter_script(dir.path())?;

    let (tx, rx) = mpsc::unbounded_channel();
    // Right suffix but not a modification.
    tx.send(LoopEvent::Changed(ChangeEvent::new(
        dir.path().join("doc.tex"),
        ChangeKind::Other,
    )))?;
    // Modification but wrong suffix.
    tx.send(LoopEvent::Changed(ChangeEvent::new(
        dir.path().join("doc.aux"),
        ChangeKind::Modify,
    )))?;
    drop(tx);

    WatchLoop::new(config(dir.path(), "./count.sh", false), rx)
        .run()
        .await?;

    assert_eq!(run_count(dir.path()), 0);
    Ok(())
}

#[tokio::test]
async fn buffered_events_are_drained_in_order() -> TestResult {
    let dir = tempdir()?;
    install_counter_script(dir.path())?;

    let (tx, rx) = mpsc::unbounded_channel();
    for name in ["a.tex", "b.bib", "c.tex"] {
        tx.send(LoopEvent::Changed(ChangeEvent::new(
            dir.path().join(name),
            ChangeKind::Modify,
        )))?;
    }
    drop(tx);

    WatchLoop::new(config(dir.path(), "./count.sh", false), rx)
        .run()
        .await?;

    assert_eq!(run_count(dir.path()), 3);
    Ok(())
}

#[tokio::test]
async fn shutdown_stops_the_loop_before_later_events() -> TestResult {
    let dir = tempdir()?;
    install_counter_script(dir.path())?;

    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(LoopEvent::ShutdownRequested)?;
    tx.send(LoopEvent::Changed(ChangeEvent::new(
        dir.path().join("doc.tex"),
        ChangeKind::Modify,
    )))?;
    drop(tx);

    WatchLoop::new(config(dir.path(), "./count.sh", false), rx)
        .run()
        .await?;

    assert_eq!(run_count(dir.path()), 0);
    Ok(())
}

#[tokio::test]
async fn spawn_failure_stops_the_loop_by_default() -> TestResult {
    let dir = tempdir()?;

    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(LoopEvent::Changed(ChangeEvent::new(
        dir.path().join("doc.tex"),
        ChangeKind::Modify,
    )))?;
    drop(tx);

    let result = WatchLoop::new(
        config(dir.path(), "definitely-not-a-real-program-6f1c", false),
        rx,
    )
    .run()
    .await;

    assert!(result.is_err());
    Ok(())
}

#[tokio::test]
async fn keep_going_logs_the_spawn_failure_and_continues() -> TestResult {
    let dir = tempdir()?;

    let (tx, rx) = mpsc::unbounded_channel();
    for name in ["a.tex", "b.tex"] {
        tx.send(LoopEvent::Changed(ChangeEvent::new(
            dir.path().join(name),
            ChangeKind::Modify,
        )))?;
    }
    drop(tx);

    WatchLoop::new(
        config(dir.path(), "definitely-not-a-real-program-6f1c", true),
        rx,
    )
    .run()
    .await?;

    Ok(())
}
