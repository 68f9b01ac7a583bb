//! Note discovery and loading from the notes home directory.

use crate::domain::{Category, Note};
use crate::infra::frontmatter::{ParseError, parse};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Errors while discovering or loading notes.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("cannot read notes home directory {path}: {source}")]
    CannotReadHome {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read notes home directory {path}: not a directory")]
    NotADirectory { path: PathBuf },

    #[error("note file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid encoding in {path}: {encoding}")]
    InvalidEncoding { path: PathBuf, encoding: String },

    #[error("cannot parse note {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl FsError {
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Collects the categories under `home` and the notes in each of them.
///
/// A category is any non-hidden directory below `home`; its notes are the
/// `*.md` files directly inside it. Markdown files in `home` itself belong to
/// no category and are skipped. Hidden files and directories are skipped.
///
/// `depth` limits how deeply categories may nest (`1` allows only top-level
/// directories); `0` means unlimited.
///
/// Categories are ordered by name and notes within a category by file name,
/// so repeated runs see the same traversal order.
///
/// # Errors
///
/// Returns `FsError::CannotReadHome` if `home` is missing or unreadable,
/// `FsError::NotADirectory` if it is a file, and `FsError::Io` if a
/// directory below it cannot be read.
pub fn collect_categories(home: &Path, depth: usize) -> Result<Vec<Category>, FsError> {
    let meta = std::fs::metadata(home).map_err(|source| FsError::CannotReadHome {
        path: home.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(FsError::NotADirectory {
            path: home.to_path_buf(),
        });
    }
    std::fs::read_dir(home).map_err(|source| FsError::CannotReadHome {
        path: home.to_path_buf(),
        source,
    })?;

    let mut walker = WalkDir::new(home).follow_links(true).sort_by_file_name();
    if depth > 0 {
        walker = walker.max_depth(depth + 1);
    }

    let mut categories: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
    for entry in walker
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(home).to_path_buf();
            FsError::Io {
                path,
                source: io::Error::from(e),
            }
        })?;

        if !entry.file_type().is_file() || !has_md_extension(&entry) {
            continue;
        }

        let Some(parent) = entry.path().parent() else {
            continue;
        };
        let Ok(rel_dir) = parent.strip_prefix(home) else {
            continue;
        };
        let Some(name) = Category::name_from_relative_dir(rel_dir) else {
            tracing::trace!(path = %entry.path().display(), "skipping note outside any category");
            continue;
        };

        categories
            .entry(name)
            .or_default()
            .push(entry.path().to_path_buf());
    }

    let categories: Vec<Category> = categories
        .into_iter()
        .map(|(name, paths)| Category::new(name, paths))
        .collect();

    tracing::debug!(
        home = %home.display(),
        categories = categories.len(),
        "collected categories"
    );

    Ok(categories)
}

/// Loads the note at `path`, which must live under `home`.
///
/// # Errors
///
/// Returns `FsError::NotFound` / `FsError::PermissionDenied` / `FsError::Io`
/// if the file cannot be read, `FsError::InvalidEncoding` if it is not UTF-8
/// with LF or CRLF line endings, and `FsError::Parse` if its frontmatter is
/// invalid. Every error carries `path`.
pub fn load_note(path: &Path, home: &Path) -> Result<Note, FsError> {
    let bytes = std::fs::read(path).map_err(|e| FsError::from_io(path, e))?;
    let content = decode_note_bytes(bytes, path)?;

    let parsed = parse(&content).map_err(|source| FsError::Parse {
        path: path.into(),
        source,
    })?;

    let rel_path = path.strip_prefix(home).unwrap_or(path).to_path_buf();
    let category = rel_path
        .parent()
        .and_then(Category::name_from_relative_dir)
        .unwrap_or_default();

    tracing::trace!(path = %path.display(), title = %parsed.title, "loaded note");

    Note::builder(path, rel_path, category, parsed.title, parsed.created)
        .tags(parsed.tags)
        .body(parsed.body)
        .build()
        .map_err(|_| FsError::Parse {
            path: path.into(),
            source: ParseError::EmptyTitle,
        })
}

/// Validates the encoding of raw note bytes and returns the text.
fn decode_note_bytes(bytes: Vec<u8>, path: &Path) -> Result<String, FsError> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(FsError::InvalidEncoding {
            path: path.into(),
            encoding: "UTF-16 LE detected (byte order mark FF FE); convert to UTF-8".into(),
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(FsError::InvalidEncoding {
            path: path.into(),
            encoding: "UTF-16 BE detected (byte order mark FE FF); convert to UTF-8".into(),
        });
    }

    let content = String::from_utf8(bytes).map_err(|e| FsError::InvalidEncoding {
        path: path.into(),
        encoding: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })?;

    let content = match content.strip_prefix('\u{FEFF}') {
        Some(stripped) => stripped.to_string(),
        None => content,
    };

    let has_lone_cr = content
        .as_bytes()
        .windows(2)
        .any(|w| w[0] == b'\r' && w[1] != b'\n')
        || content.as_bytes().last() == Some(&b'\r');
    if has_lone_cr {
        return Err(FsError::InvalidEncoding {
            path: path.into(),
            encoding: "CR-only line endings detected (old Mac format); convert to LF or CRLF"
                .into(),
        });
    }

    Ok(content)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

fn has_md_extension(entry: &DirEntry) -> bool {
    entry.path().extension().is_some_and(|e| e == "md")
}
