//! Error types for running a game.

use derive_more::{Display, Error, From};

/// Failures that end a game early.
///
/// Bad answers from players are never errors: they are rejected at the prompt
/// and asked again. Only the console itself can stop a game.
#[derive(Debug, Display, Error, From)]
pub enum GameError {
    /// The input stream reached end of file while waiting for an answer.
    #[display("input stream closed")]
    InputClosed,
    /// Reading from or writing to the console failed.
    #[display("console I/O failed: {_0}")]
    #[from]
    Io(#[error(source)] std::io::Error),
    /// A turn was requested while the game was not in progress.
    #[display("game is not in progress")]
    NotInProgress,
    /// The match is over; start a new [`Game`](crate::Game) to play again.
    #[display("game has already concluded")]
    AlreadyConcluded,
}
