//! Tic-tac-toe game engine.
//!
//! Pure game logic for a two-player console match. Nothing here talks to a
//! terminal directly: text comes from a [`Presentation`] and answers arrive
//! through a [`Console`], both supplied by the caller.
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//! use tictactoe_engine::{Game, IoConsole, Presentation};
//!
//! # fn example(presentation: impl Presentation) -> Result<(), tictactoe_engine::GameError> {
//! let mut console = IoConsole::new(io::stdin().lock(), io::stdout());
//! let mut game = Game::new(presentation);
//! let outcome = game.play(&mut console)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod console;
mod error;
mod game;
mod player;
mod presentation;

// Crate-level exports - Board state
pub use board::{Board, CELL_COUNT, Cell, WINNING_COMBOS};

// Crate-level exports - Players
pub use player::{Player, Seat};

// Crate-level exports - Match orchestration
pub use game::{Game, Outcome, Phase, coerce_number, parse_symbol};

// Crate-level exports - Collaborators
pub use console::{Console, IoConsole};
pub use presentation::Presentation;

// Crate-level exports - Errors
pub use error::GameError;
