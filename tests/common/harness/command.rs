//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since not every test binary uses every helper
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `notes` binary.
///
/// The user's own configuration never leaks in: `NOTES_CONFIG` points at a
/// file that does not exist and the pager/editor/home variables are cleared
/// unless a test sets them with [`NotesCommand::env`].
pub struct NotesCommand {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl NotesCommand {
    /// Creates a new command for the `notes` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
        }
    }

    /// Sets the `--dir` option to specify the notes home.
    pub fn dir(mut self, path: &Path) -> Self {
        self.args.push("--dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Sets an environment variable for the child process.
    pub fn env(mut self, key: &str, value: impl AsRef<str>) -> Self {
        self.envs.push((key.to_string(), value.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("notes").expect("Failed to find notes binary");
        for key in ["NOTES_HOME", "NOTES_EDITOR", "EDITOR", "NOTES_PAGER", "RUST_LOG", "CLICOLOR_FORCE"] {
            cmd.env_remove(key);
        }
        cmd.env("NOTES_CONFIG", "/nonexistent/notes/config.toml");
        cmd.env("NO_COLOR", "1");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for `find TITLE`.
    pub fn find(self, title: &str) -> Self {
        self.args(["find", title])
    }

    /// Configures for `find TITLE WITHIN`.
    pub fn find_within(self, title: &str, within: &str) -> Self {
        self.args(["find", title, within])
    }

    /// Adds `--relative`.
    pub fn relative(self) -> Self {
        self.args(["--relative"])
    }

    /// Adds `--sort KEY`.
    pub fn sort(self, key: &str) -> Self {
        self.args(["--sort", key])
    }

    /// Adds `--edit`.
    pub fn edit(self) -> Self {
        self.args(["--edit"])
    }
}

impl Default for NotesCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_runs_binary() {
        NotesCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_output_success() {
        let output = NotesCommand::new().args(["--help"]).output_success();
        assert!(output.contains("notes"));
        assert!(output.contains("find"));
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = NotesCommand::new().find("title").relative().sort("filename");
        assert_eq!(
            cmd.get_args(),
            ["find", "title", "--relative", "--sort", "filename"]
        );
    }
}
