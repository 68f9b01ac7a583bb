//! CLI command definitions and handlers

pub mod config;
pub mod handlers;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::find::SortKey;

/// notes - find markdown notes by title and content
#[derive(Parser, Debug)]
#[command(name = "notes", version, about, long_about = None)]
pub struct Cli {
    /// Notes home directory (overrides $NOTES_HOME and the config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find notes whose title contains TITLE, optionally narrowed by WITHIN
    Find(FindArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `find` command
#[derive(Parser, Debug)]
pub struct FindArgs {
    /// Substring of the note title (case-insensitive; empty matches all)
    pub title: String,

    /// Text to look for in the body, tags, and created date
    pub within: Option<String>,

    /// Print paths relative to the notes home, one per line
    #[arg(short, long)]
    pub relative: bool,

    /// Sort order of the results
    #[arg(short, long, value_enum, default_value_t = SortKey::Created)]
    pub sort: SortKey,

    /// Open the matched notes in the editor instead of listing them
    #[arg(short, long)]
    pub edit: bool,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
