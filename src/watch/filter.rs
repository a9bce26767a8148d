// src/watch/filter.rs

use std::path::PathBuf;

/// What happened to a path, reduced to the two cases the filter cares about.
///
/// notify reports a richer taxonomy (create, remove, metadata, rename, ...);
/// only data modifications can trigger a run, so everything else collapses
/// into `Other` and is dropped by [`qualifies`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Modify,
    Other,
}

/// One filesystem change, as seen by the dispatch loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub path: PathBuf,
    pub kind: ChangeKind,
}

impl ChangeEvent {
    pub fn new(path: impl Into<PathBuf>, kind: ChangeKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Decide whether a change event should trigger the command.
///
/// True iff the event is a modification and its path ends with one of the
/// configured suffixes. Matching is case-sensitive and purely textual: the
/// suffix must be the literal tail of the path, so `"a.tex"` matches `.tex`
/// while `"atex"` does not. No glob semantics.
pub fn qualifies(event: &ChangeEvent, suffixes: &[String]) -> bool {
    if event.kind != ChangeKind::Modify {
        return false;
    }

    let path = event.path.to_string_lossy();
    suffixes.iter().any(|s| path.ends_with(s.as_str()))
}
