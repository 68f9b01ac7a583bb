//! A loaded note: front matter metadata plus body.

use crate::domain::Tag;
use chrono::{DateTime, FixedOffset, Utc};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error returned when constructing an invalid note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNoteError;

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note: title cannot be empty")
    }
}

impl std::error::Error for ParseNoteError {}

/// A note file that has been read and parsed.
///
/// Notes are built once by the loader and never change afterwards, so the
/// matcher, the sorter and the output dispatcher all look at the same
/// values. The searchable text (title, tags, created timestamp and body) is
/// assembled at build time.
///
/// The modification time is the only field that is not captured at load
/// time: it comes from the filesystem when [`Note::modified`] is called.
///
/// # Examples
///
/// ```
/// use notes::domain::{Note, Tag};
/// use chrono::DateTime;
///
/// let created = DateTime::parse_from_rfc3339("2018-10-30T11:37:45+09:00").unwrap();
/// let note = Note::builder("/notes/memo/tasks.md", "memo/tasks.md", "memo", "My tasks", created)
///     .tags(vec![Tag::new("todo").unwrap()])
///     .body("- write docs")
///     .build()
///     .unwrap();
///
/// assert_eq!(note.title(), "My tasks");
/// assert!(note.searchable_text().contains("write docs"));
/// ```
#[derive(Clone, PartialEq)]
pub struct Note {
    path: PathBuf,
    rel_path: PathBuf,
    category: String,
    title: String,
    tags: Vec<Tag>,
    created: DateTime<FixedOffset>,
    body: String,
    searchable: String,
}

impl Note {
    /// Creates a builder for a note with its required fields.
    pub fn builder(
        path: impl Into<PathBuf>,
        rel_path: impl Into<PathBuf>,
        category: impl Into<String>,
        title: impl Into<String>,
        created: DateTime<FixedOffset>,
    ) -> NoteBuilder {
        NoteBuilder {
            path: path.into(),
            rel_path: rel_path.into(),
            category: category.into(),
            title: title.into(),
            tags: Vec::new(),
            created,
            body: String::new(),
        }
    }

    /// Path of the note file: the notes home joined with [`Note::rel_path`].
    ///
    /// Absolute only when the home was given as an absolute path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the note file relative to the notes home.
    pub fn rel_path(&self) -> &Path {
        &self.rel_path
    }

    /// Base name of the note file, e.g. `tasks.md`.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Creation timestamp declared in the front matter.
    pub fn created(&self) -> DateTime<FixedOffset> {
        self.created
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Text searched by "within" queries: title, tags, created and body.
    pub fn searchable_text(&self) -> &str {
        &self.searchable
    }

    /// Reads the file's modification time from the filesystem.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be stat'ed, for
    /// example because it was removed after the note was loaded.
    pub fn modified(&self) -> io::Result<DateTime<Utc>> {
        let mtime = std::fs::metadata(&self.path)?.modified()?;
        Ok(DateTime::<Utc>::from(mtime))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.rel_path.display())
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("path", &self.path)
            .field("category", &self.category)
            .field("title", &self.title)
            .field("tags", &self.tags)
            .field("created", &self.created)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Note`].
pub struct NoteBuilder {
    path: PathBuf,
    rel_path: PathBuf,
    category: String,
    title: String,
    tags: Vec<Tag>,
    created: DateTime<FixedOffset>,
    body: String,
}

impl NoteBuilder {
    /// Sets the tags. Duplicates are removed, first occurrence kept.
    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        let mut unique = Vec::with_capacity(tags.len());
        for tag in tags {
            if !unique.contains(&tag) {
                unique.push(tag);
            }
        }
        self.tags = unique;
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds the note and its searchable text.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the title is empty or whitespace-only.
    pub fn build(self) -> Result<Note, ParseNoteError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ParseNoteError);
        }

        let tags: Vec<&str> = self.tags.iter().map(Tag::as_str).collect();
        let searchable = format!(
            "{}\n{}\n{}\n{}",
            title,
            tags.join(" "),
            self.created.to_rfc3339(),
            self.body
        );

        Ok(Note {
            path: self.path,
            rel_path: self.rel_path,
            category: self.category,
            title: title.to_string(),
            tags: self.tags,
            created: self.created,
            body: self.body,
            searchable,
        })
    }
}
