//! Configuration file and environment support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default notes home directory
    pub dir: Option<PathBuf>,

    /// Editor command used by `find --edit`
    pub editor: Option<String>,

    /// Pager command that listings are piped through
    pub pager: Option<String>,

    /// Force coloured output on or off
    pub color: Option<bool>,
}

impl Config {
    /// Load configuration from [`Config::config_path`].
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// `$NOTES_CONFIG` if set, otherwise `~/.config/notes/config.toml`.
    pub fn config_path() -> PathBuf {
        Self::config_path_with(env_var)
    }

    fn config_path_with(env: impl Fn(&str) -> Option<String>) -> PathBuf {
        if let Some(path) = env("NOTES_CONFIG") {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notes")
            .join("config.toml")
    }

    /// Resolve the notes home directory.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. $NOTES_HOME environment variable
    /// 3. Config file `dir` setting
    /// 4. Current working directory
    pub fn notes_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        self.notes_dir_with(cli_dir, env_var)
    }

    fn notes_dir_with(
        &self,
        cli_dir: Option<&PathBuf>,
        env: impl Fn(&str) -> Option<String>,
    ) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| env("NOTES_HOME").map(PathBuf::from))
            .or_else(|| self.dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve the editor command.
    ///
    /// Precedence order:
    /// 1. Config file `editor` setting
    /// 2. $NOTES_EDITOR environment variable
    /// 3. $EDITOR environment variable
    ///
    /// `None` means no editor is configured.
    pub fn editor(&self) -> Option<String> {
        self.editor_with(env_var)
    }

    fn editor_with(&self, env: impl Fn(&str) -> Option<String>) -> Option<String> {
        non_empty(self.editor.clone())
            .or_else(|| env("NOTES_EDITOR"))
            .or_else(|| env("EDITOR"))
    }

    /// Resolve the pager command: config file `pager`, then $NOTES_PAGER.
    ///
    /// `None` disables paging.
    pub fn pager(&self) -> Option<String> {
        self.pager_with(env_var)
    }

    fn pager_with(&self, env: impl Fn(&str) -> Option<String>) -> Option<String> {
        non_empty(self.pager.clone()).or_else(|| env("NOTES_PAGER"))
    }

    /// Decide whether to colour output.
    ///
    /// `--no-color` wins, then the config file `color` setting, then
    /// terminal and `NO_COLOR` detection.
    pub fn color(&self, no_color_flag: bool) -> bool {
        if no_color_flag {
            return false;
        }
        self.color
            .unwrap_or_else(|| colored::control::SHOULD_COLORIZE.should_colorize())
    }
}

/// Reads an environment variable, treating an empty value as unset.
fn env_var(key: &str) -> Option<String> {
    non_empty(std::env::var(key).ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
