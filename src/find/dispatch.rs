//! Hands sorted results to a listing, a pager, or an editor.

use std::io::{self, Write};
use std::path::PathBuf;

use colored::Colorize;

use super::FindError;
use crate::domain::{Note, Tag};
use crate::infra::{EditorLauncher, Sink, run_pager};

/// What to do with the matched notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DispatchMode {
    /// One aligned line per note: path, tags, title
    #[default]
    Oneline,
    /// Paths relative to the notes home, one per line
    RelativePaths,
    /// Open every note in the editor
    Edit,
}

/// Rendering options for listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// Emit ANSI colours.
    pub color: bool,
}

/// Routes a sorted result set to its consumer.
#[derive(Default)]
pub struct Dispatcher<'a> {
    /// Pager command line; `None` writes straight to the sink.
    pub pager: Option<&'a str>,
    /// Editor for [`DispatchMode::Edit`]; `None` makes edit mode an error.
    pub editor: Option<&'a dyn EditorLauncher>,
    pub render: RenderContext,
}

impl Dispatcher<'_> {
    /// Emits `notes` in their current order according to `mode`.
    ///
    /// Edit mode never writes to `sink` and never starts the pager. An
    /// empty result set emits nothing and starts nothing.
    ///
    /// # Errors
    ///
    /// `FindError::EditorNotConfigured` for edit mode without an editor,
    /// `FindError::Editor` / `FindError::Pager` for subprocess failures, and
    /// `FindError::Write` if writing directly to the sink fails. Output
    /// already written is not taken back.
    pub fn emit(&self, notes: &[Note], mode: DispatchMode, sink: Sink<'_>) -> Result<(), FindError> {
        if notes.is_empty() {
            return Ok(());
        }

        if mode == DispatchMode::Edit {
            let editor = self.editor.ok_or(FindError::EditorNotConfigured)?;
            let paths: Vec<PathBuf> = notes.iter().map(|n| n.path().to_path_buf()).collect();
            editor.open(&paths)?;
            return Ok(());
        }

        let render = self.render;
        let write = move |out: &mut dyn Write| match mode {
            DispatchMode::RelativePaths => write_relative_paths(out, notes),
            _ => write_oneline(out, notes, render),
        };

        if let Some(pager) = self.pager {
            run_pager(pager, sink, write)?;
            return Ok(());
        }

        let result = match sink {
            Sink::Stdout => {
                let mut stdout = io::stdout().lock();
                write(&mut stdout).and_then(|()| stdout.flush())
            }
            Sink::Writer(out) => write(&mut *out).and_then(|()| out.flush()),
        };
        result.map_err(|source| FindError::Write { source })
    }
}

/// Writes each note's path relative to the notes home, one per line.
pub fn write_relative_paths(out: &mut dyn Write, notes: &[Note]) -> io::Result<()> {
    let mut buf = String::new();
    for note in notes {
        buf.push_str(&note.rel_path().to_string_lossy());
        buf.push('\n');
    }
    out.write_all(buf.as_bytes())
}

/// Writes one line per note: relative path, comma-joined tags, and title.
///
/// The path and tags columns are padded to the widest entry so titles line
/// up.
pub fn write_oneline(out: &mut dyn Write, notes: &[Note], render: RenderContext) -> io::Result<()> {
    let rows: Vec<(String, String, &str)> = notes
        .iter()
        .map(|n| {
            let path = n.rel_path().to_string_lossy().into_owned();
            let tags = n.tags().iter().map(Tag::as_str).collect::<Vec<_>>().join(",");
            (path, tags, n.title())
        })
        .collect();

    let path_width = rows.iter().map(|r| r.0.chars().count()).max().unwrap_or(0);
    let tags_width = rows.iter().map(|r| r.1.chars().count()).max().unwrap_or(0);

    let mut buf = String::new();
    for (path, tags, title) in &rows {
        let path_pad = " ".repeat(path_width - path.chars().count());
        let tags_pad = " ".repeat(tags_width - tags.chars().count());
        if render.color {
            buf.push_str(&format!(
                "{}{} {}{} {}\n",
                path.green(),
                path_pad,
                tags.yellow(),
                tags_pad,
                title.bold()
            ));
        } else {
            buf.push_str(&format!("{path}{path_pad} {tags}{tags_pad} {title}\n"));
        }
    }
    out.write_all(buf.as_bytes())
}
