//! Launching the user's editor on a set of note files.

use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};
use thiserror::Error;

/// Errors from launching the editor.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("cannot parse editor command '{command}': {source}")]
    Parse {
        command: String,
        #[source]
        source: shell_words::ParseError,
    },

    #[error("cannot parse editor command: command line is empty")]
    Empty,

    #[error("cannot start editor command '{command}': {source}")]
    Start {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("editor command '{command}' exited with {status}")]
    Exit { command: String, status: ExitStatus },
}

/// Opens note files in an editor (allows mocking in tests).
pub trait EditorLauncher {
    fn open(&self, paths: &[PathBuf]) -> Result<(), EditorError>;
}

/// Runs a configured editor command line as a child process.
///
/// The command line is split with shell quoting rules, so values such as
/// `code --wait` or `'/Applications/My Editor.app/bin/edit'` work. Paths are
/// appended as trailing arguments and the editor inherits the terminal.
#[derive(Debug, Clone)]
pub struct ProcessEditor {
    command: String,
}

impl ProcessEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl EditorLauncher for ProcessEditor {
    fn open(&self, paths: &[PathBuf]) -> Result<(), EditorError> {
        let argv = shell_words::split(&self.command).map_err(|source| EditorError::Parse {
            command: self.command.clone(),
            source,
        })?;
        let (program, args) = argv.split_first().ok_or(EditorError::Empty)?;

        tracing::debug!(command = %self.command, files = paths.len(), "opening editor");

        let status = Command::new(program)
            .args(args)
            .args(paths)
            .status()
            .map_err(|source| EditorError::Start {
                command: self.command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(EditorError::Exit {
                command: self.command.clone(),
                status,
            });
        }

        Ok(())
    }
}
