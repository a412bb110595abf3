//! Tic-tac-toe for two players sharing one terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use console_tictactoe::{Cli, ConsolePresentation, Session};
use std::io;
use tictactoe_engine::{GameError, IoConsole};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = cli.settings()?;

    // Logs go to stderr so they never interleave with the board
    let filter = match cli.log_filter.as_deref() {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(?settings, "Starting tic-tac-toe");

    let mut console = IoConsole::new(io::stdin().lock(), io::stdout());
    let session = Session::new(ConsolePresentation::new(*settings.color()));

    match session.run(&mut console) {
        Ok(outcomes) => {
            info!(games = outcomes.len(), "Session finished");
            Ok(())
        }
        Err(GameError::InputClosed) => {
            info!("Input closed, exiting");
            Ok(())
        }
        Err(e) => Err(anyhow::Error::new(e).context("Game session failed")),
    }
}
