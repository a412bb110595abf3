//! Console tic-tac-toe.
//!
//! Wires the [`tictactoe_engine`] game loop to a terminal: English prompts,
//! a replay loop, settings and command-line flags.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod presentation;
mod session;
mod settings;

// Crate-level exports - Command line
pub use cli::Cli;

// Crate-level exports - Terminal text
pub use presentation::ConsolePresentation;

// Crate-level exports - Replay loop
pub use session::{Session, wants_replay};

// Crate-level exports - Settings
pub use settings::{ConfigError, Settings};
