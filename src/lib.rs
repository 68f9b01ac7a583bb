//! notes - find markdown notes by title and content

pub mod cli;
pub mod domain;
pub mod find;
pub mod infra;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_completions, handle_find},
};
use find::RenderContext;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let notes_dir = config.notes_dir(cli.dir.as_ref());
    let render = RenderContext {
        color: config.color(cli.no_color),
    };
    // `colored` consults its own global switch when rendering
    colored::control::set_override(render.color);

    match &cli.command {
        Command::Find(args) => handle_find(args, &notes_dir, &config, render),
        Command::Completions(args) => handle_completions(args),
    }
}

/// Installs a stderr subscriber; `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
