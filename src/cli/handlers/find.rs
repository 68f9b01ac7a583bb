//! Find command handler.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::FindArgs;
use crate::cli::config::Config;
use crate::find::{DispatchMode, Dispatcher, FindCmd, Query, RenderContext};
use crate::infra::{EditorLauncher, ProcessEditor, Sink};

/// Internal implementation that accepts the resolved pager and editor.
pub(crate) fn handle_find_impl(
    args: &FindArgs,
    notes_dir: &Path,
    pager: Option<&str>,
    editor: Option<&dyn EditorLauncher>,
    render: RenderContext,
    sink: Sink<'_>,
) -> Result<()> {
    // Edit wins over relative listing when both are given
    let mode = if args.edit {
        DispatchMode::Edit
    } else if args.relative {
        DispatchMode::RelativePaths
    } else {
        DispatchMode::Oneline
    };

    let cmd = FindCmd {
        home: notes_dir,
        query: Query::new(&args.title, args.within.as_deref().unwrap_or("")),
        sort: args.sort,
        mode,
        dispatcher: Dispatcher {
            pager,
            editor,
            render,
        },
    };

    tracing::info!(
        home = %notes_dir.display(),
        title = %args.title,
        within = args.within.as_deref().unwrap_or(""),
        ?mode,
        sort = ?args.sort,
        "running find"
    );

    cmd.run(sink)
        .with_context(|| format!("find failed for query '{}'", args.title))
}

pub fn handle_find(
    args: &FindArgs,
    notes_dir: &Path,
    config: &Config,
    render: RenderContext,
) -> Result<()> {
    let editor = config.editor().map(ProcessEditor::new);
    let pager = config.pager();
    handle_find_impl(
        args,
        notes_dir,
        pager.as_deref(),
        editor.as_ref().map(|e| e as &dyn EditorLauncher),
        render,
        Sink::Stdout,
    )
}
