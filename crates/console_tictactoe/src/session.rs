//! Replay loop: one match after another until the players stop.

use tictactoe_engine::{Console, Game, GameError, Outcome, Presentation};
use tracing::{info, instrument};

/// Runs matches back to back, each on a brand-new [`Game`].
#[derive(Debug, Clone)]
pub struct Session<P> {
    presentation: P,
}

impl<P: Presentation + Clone> Session<P> {
    /// Creates a session that hands a copy of `presentation` to every match.
    pub fn new(presentation: P) -> Self {
        Self { presentation }
    }

    /// Plays matches until the players decline another one.
    ///
    /// Returns the outcome of every match played, in order.
    #[instrument(skip_all)]
    pub fn run<C: Console + ?Sized>(&self, console: &mut C) -> Result<Vec<Outcome>, GameError> {
        let mut outcomes = Vec::new();
        loop {
            let mut game = Game::new(self.presentation.clone());
            let outcome = game.play(console)?;
            info!(game = outcomes.len() + 1, ?outcome, "Match finished");
            outcomes.push(outcome);

            console.write_line(&self.presentation.replay_prompt())?;
            let answer = console.read_line()?;
            if !wants_replay(&answer) {
                console.write_line(&self.presentation.farewell())?;
                return Ok(outcomes);
            }
        }
    }
}

/// Returns true if `answer` asks for another match (`y`, any case).
pub fn wants_replay(answer: &str) -> bool {
    answer.to_lowercase() == "y"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wants_replay() {
        assert!(wants_replay("y"));
        assert!(wants_replay("Y"));
        assert!(!wants_replay("n"));
        assert!(!wants_replay("yes"));
        assert!(!wants_replay(" y"));
        assert!(!wants_replay(""));
    }
}
