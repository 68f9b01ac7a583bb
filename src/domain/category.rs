//! Categories: notes grouped by the directory they live in.

use std::path::{Path, PathBuf};

/// A directory under the notes home and the note files directly inside it.
///
/// The name is the directory path relative to the home, always joined with
/// `/` (for example `blog/daily`). Note paths are absolute and kept in the
/// order discovery produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    note_paths: Vec<PathBuf>,
}

impl Category {
    pub fn new(name: impl Into<String>, note_paths: Vec<PathBuf>) -> Self {
        Self {
            name: name.into(),
            note_paths,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn note_paths(&self) -> &[PathBuf] {
        &self.note_paths
    }

    /// Builds a category name from a directory path relative to the home.
    ///
    /// Returns `None` for the home itself, which is not a category.
    pub fn name_from_relative_dir(dir: &Path) -> Option<String> {
        let parts: Vec<_> = dir
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("/"))
        }
    }
}
