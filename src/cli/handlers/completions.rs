//! Shell completion script generation.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::generate;
use std::io::{self, Write};

use crate::cli::{Cli, CompletionsArgs};

pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    write_completions(args, &mut io::stdout())
}

pub(crate) fn write_completions(args: &CompletionsArgs, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "notes", out);
    Ok(())
}
