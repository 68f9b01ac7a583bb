//! Streaming output through an external pager process.

use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use thiserror::Error;

/// Where formatted output ends up.
pub enum Sink<'a> {
    /// The process's own stdout. A pager inherits it directly so it can
    /// talk to the terminal.
    Stdout,
    /// An arbitrary writer. A pager's output is piped and copied into it.
    Writer(&'a mut (dyn Write + Send)),
}

/// Errors from running the pager.
#[derive(Debug, Error)]
pub enum PagerError {
    #[error("cannot parse pager command '{command}': {source}")]
    Parse {
        command: String,
        #[source]
        source: shell_words::ParseError,
    },

    #[error("cannot parse pager command: command line is empty")]
    Empty,

    #[error("cannot start pager command '{command}': {source}")]
    Start {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("pager command did not run successfully: {source}")]
    Run {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("pager command did not run successfully: '{command}' exited with {status}")]
    Exit { command: String, status: ExitStatus },

    #[error("cannot write to pager command '{command}': {source}")]
    Write {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Runs `command_line` as a pager and feeds it whatever `write` produces.
///
/// The pager is spawned, `write` runs against its stdin, stdin is closed,
/// and the pager is waited for before returning, on success and on every
/// error path alike. With [`Sink::Writer`], a scoped thread copies the
/// pager's stdout into the writer and is joined before returning.
///
/// A broken pipe while writing is not an error when the pager itself exited
/// successfully: that is what happens when the user quits the pager early.
///
/// # Errors
///
/// In priority order: `Parse`/`Empty` if the command line cannot be split,
/// `Start` if it cannot be spawned, `Run` if copying its output failed,
/// `Exit` if it exited unsuccessfully, and `Write` if feeding it failed.
pub fn run_pager<F>(command_line: &str, sink: Sink<'_>, write: F) -> Result<(), PagerError>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let argv = shell_words::split(command_line).map_err(|source| PagerError::Parse {
        command: command_line.to_string(),
        source,
    })?;
    let (program, args) = argv.split_first().ok_or(PagerError::Empty)?;

    let mut command = Command::new(program);
    command.args(args).stdin(Stdio::piped());
    let capture = match sink {
        Sink::Stdout => {
            command.stdout(Stdio::inherit());
            None
        }
        Sink::Writer(writer) => {
            command.stdout(Stdio::piped());
            Some(writer)
        }
    };

    tracing::debug!(command = command_line, "starting pager");
    let mut child = command.spawn().map_err(|source| PagerError::Start {
        command: command_line.to_string(),
        source,
    })?;
    let stdin = child.stdin.take();
    let stdout = child.stdout.take();

    let (write_result, status, copy_result) = thread::scope(|scope| {
        let copier = match (stdout, capture) {
            (Some(mut out), Some(writer)) => Some(scope.spawn(move || {
                io::copy(&mut out, &mut *writer)?;
                writer.flush()
            })),
            _ => None,
        };

        let write_result = match stdin {
            Some(mut stdin) => write(&mut stdin).and_then(|()| stdin.flush()),
            None => Ok(()),
        };

        let status = child.wait();
        let copy_result = copier.map(|handle| {
            handle
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("pager output copier panicked")))
        });

        (write_result, status, copy_result)
    });

    let command = command_line.to_string();
    if let Some(Err(source)) = copy_result {
        return Err(PagerError::Run { command, source });
    }
    let status = status.map_err(|source| PagerError::Run {
        command: command.clone(),
        source,
    })?;
    if !status.success() {
        return Err(PagerError::Exit { command, status });
    }
    match write_result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!(command = %command, "pager closed its input early");
            Ok(())
        }
        Err(source) => Err(PagerError::Write { command, source }),
        Ok(()) => Ok(()),
    }
}
