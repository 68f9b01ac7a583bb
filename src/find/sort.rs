//! Ordering of matched notes.

use std::cmp::Reverse;

use clap::ValueEnum;

use super::FindError;
use crate::domain::Note;

/// Key used to order search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Creation timestamp from the front matter, newest first (default)
    #[default]
    Created,
    /// File modification time, most recently modified first
    Modified,
    /// Note file name, ascending
    Filename,
    /// Category name, ascending
    Category,
}

/// Returns `notes` ordered by `key`.
///
/// Every ordering is stable: notes with equal keys keep their input order.
///
/// # Errors
///
/// Sorting by [`SortKey::Modified`] stats every note first; the first note
/// whose modification time cannot be read aborts the sort with
/// `FindError::Modified` naming that note.
pub fn sort_notes(mut notes: Vec<Note>, key: SortKey) -> Result<Vec<Note>, FindError> {
    tracing::debug!(?key, notes = notes.len(), "sorting matches");

    match key {
        SortKey::Created => notes.sort_by_key(|n| Reverse(n.created())),
        SortKey::Filename => notes.sort_by_cached_key(Note::file_name),
        SortKey::Category => notes.sort_by(|a, b| a.category().cmp(b.category())),
        SortKey::Modified => {
            let mut keyed = notes
                .into_iter()
                .map(|note| match note.modified() {
                    Ok(mtime) => Ok((mtime, note)),
                    Err(source) => Err(FindError::Modified {
                        path: note.path().to_path_buf(),
                        source,
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            keyed.sort_by_key(|(mtime, _)| Reverse(*mtime));
            return Ok(keyed.into_iter().map(|(_, note)| note).collect());
        }
    }

    Ok(notes)
}
