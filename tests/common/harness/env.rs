//! Isolated test environment with temp directory.

use super::{NotesCommand, TestNote};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes home.
///
/// Creates a temp directory that is automatically cleaned up on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the notes home
    notes_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with an empty notes home.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            notes_dir,
        }
    }

    /// Returns the path to the notes home.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Writes a test note below its category and returns the absolute path.
    pub fn add_note(&self, test_note: &TestNote) -> PathBuf {
        self.write_file(&test_note.rel_path().to_string_lossy(), &test_note.to_markdown())
    }

    /// Writes a file at `rel` below the notes home, creating parent
    /// directories, and returns its absolute path.
    pub fn write_file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.notes_dir.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a NotesCommand configured for this test environment.
    pub fn cmd(&self) -> NotesCommand {
        NotesCommand::new().dir(&self.notes_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.notes_dir().is_dir(), "notes home should be a directory");
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.notes_dir().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_add_note_creates_category_dirs() {
        let env = TestEnv::new();
        let path = env.add_note(&TestNote::new("blog/tech", "go.md", "Go"));

        assert!(path.is_file());
        assert!(path.ends_with("blog/tech/go.md"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("---\ntitle: \"Go\"\n"));
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let args = env.cmd().get_args().to_vec();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.notes_dir().to_string_lossy());
    }
}
