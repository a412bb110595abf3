//! Command-line interface for the tic-tac-toe console.

use crate::{ConfigError, Settings};
use clap::Parser;
use std::path::PathBuf;
use tracing::instrument;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print warnings without ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Tracing filter directives, e.g. "debug" (overrides RUST_LOG)
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl Cli {
    /// Loads the settings file, if any, and applies flag overrides.
    #[instrument(skip(self), fields(config = ?self.config))]
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let settings = Settings::load(self.config.as_deref())?;
        Ok(if self.no_color {
            settings.with_color(false)
        } else {
            settings
        })
    }
}
