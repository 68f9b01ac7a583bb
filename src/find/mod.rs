//! The search-and-dispatch pipeline: discover, load, match, sort, emit.

pub mod dispatch;
pub mod matcher;
pub mod sort;

pub use dispatch::{DispatchMode, Dispatcher, RenderContext};
pub use matcher::Query;
pub use sort::SortKey;

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::Note;
use crate::infra::{EditorError, FsError, PagerError, Sink, collect_categories, load_note};

/// Errors from running a find.
#[derive(Debug, Error)]
pub enum FindError {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("cannot resolve modification time of {path}: {source}")]
    Modified {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output: {source}")]
    Write {
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Pager(#[from] PagerError),

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error("editor command is not configured; set $NOTES_EDITOR or `editor` in the config file")]
    EditorNotConfigured,
}

/// Loads every note under `home` and keeps those matching `query`.
///
/// Matches are returned in traversal order. The first note that cannot be
/// loaded aborts the search.
pub fn find_notes(home: &Path, query: &Query) -> Result<Vec<Note>, FindError> {
    let categories = collect_categories(home, 0)?;

    let mut matched = Vec::new();
    let mut scanned = 0usize;
    for category in &categories {
        for path in category.note_paths() {
            let note = load_note(path, home)?;
            scanned += 1;
            if matcher::matches(&note, query) {
                matched.push(note);
            }
        }
    }

    tracing::debug!(
        title = query.title(),
        within = query.within(),
        scanned,
        matched = matched.len(),
        "matched notes"
    );
    Ok(matched)
}

/// A single `find` invocation.
pub struct FindCmd<'a> {
    pub home: &'a Path,
    pub query: Query,
    pub sort: SortKey,
    pub mode: DispatchMode,
    pub dispatcher: Dispatcher<'a>,
}

impl FindCmd<'_> {
    /// Runs the whole pipeline and emits the result to `sink`.
    ///
    /// Nothing is emitted until every note has been loaded and sorted, so a
    /// load or sort failure leaves the sink untouched.
    pub fn run(&self, sink: Sink<'_>) -> Result<(), FindError> {
        let matched = find_notes(self.home, &self.query)?;
        let sorted = sort::sort_notes(matched, self.sort)?;
        self.dispatcher.emit(&sorted, self.mode, sink)
    }
}
