//! Match orchestration: player setup, the turn loop and the final result.
//!
//! A [`Game`] moves through three phases:
//! - `Setup` - both players are asked for a name and a marker
//! - `InProgress` - players alternate until the board is won or full
//! - `Concluded` - the outcome is read back off the board
//!
//! Bad answers are never fatal. Every prompt repeats, without limit, until
//! it gets an acceptable answer or the console runs out of input.

use crate::{Board, Console, GameError, Player, Presentation, Seat};
use strum::Display;
use tracing::{debug, info, instrument};

/// Lifecycle phase of a [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Phase {
    /// Players are being created.
    Setup,
    /// Turns are being played.
    InProgress,
    /// The match is over.
    Concluded,
}

/// Final result of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The player who completed a winning combo.
    Winner(Player),
    /// The board filled up without a winner.
    Draw,
}

/// One match of tic-tac-toe between two players.
pub struct Game<P> {
    board: Board,
    presentation: P,
    first_player: Option<Player>,
    second_player: Option<Player>,
    current: Seat,
    phase: Phase,
}

impl<P: Presentation> Game<P> {
    /// Creates a fresh match that still needs its players.
    #[instrument(skip_all)]
    pub fn new(presentation: P) -> Self {
        Self {
            board: Board::new(),
            presentation,
            first_player: None,
            second_player: None,
            current: Seat::First,
            phase: Phase::Setup,
        }
    }

    /// Creates a match with both players already chosen, ready for its first turn.
    #[instrument(skip(presentation))]
    pub fn with_players(presentation: P, first: Player, second: Player) -> Self {
        Self {
            first_player: Some(first),
            second_player: Some(second),
            phase: Phase::InProgress,
            ..Self::new(presentation)
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the player who moves first, once set up.
    pub fn first_player(&self) -> Option<&Player> {
        self.first_player.as_ref()
    }

    /// Returns the player who moves second, once set up.
    pub fn second_player(&self) -> Option<&Player> {
        self.second_player.as_ref()
    }

    /// Returns the player whose turn it is, once set up.
    pub fn current_player(&self) -> Option<&Player> {
        match self.current {
            Seat::First => self.first_player.as_ref(),
            Seat::Second => self.second_player.as_ref(),
        }
    }

    /// Plays the whole match: setup, turns, then the result.
    ///
    /// Setup is skipped for a game whose players are already chosen. A
    /// concluded game cannot be played again.
    #[instrument(skip_all, fields(phase = %self.phase))]
    pub fn play<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<Outcome, GameError> {
        match self.phase {
            Phase::Setup => self.set_up(console)?,
            Phase::InProgress => {}
            Phase::Concluded => return Err(GameError::AlreadyConcluded),
        }
        self.show_board(console)?;
        self.player_turns(console)?;
        self.conclusion(console)
    }

    /// Asks for player `number`'s name and marker.
    ///
    /// The marker must be a single non-digit character other than `banned`.
    #[instrument(skip(self, console))]
    pub fn create_player<C: Console + ?Sized>(
        &self,
        console: &mut C,
        number: u8,
        banned: Option<char>,
    ) -> Result<Player, GameError> {
        console.write_line(&self.presentation.name_prompt(number))?;
        let name = console.read_line()?;
        let symbol = self.symbol_input(console, banned)?;
        Ok(Player::new(name, symbol))
    }

    /// Plays one turn for the current player: ask, mark, show the board.
    #[instrument(skip_all)]
    pub fn turn<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), GameError> {
        if self.phase != Phase::InProgress {
            return Err(GameError::NotInProgress);
        }
        let player = self
            .current_player()
            .cloned()
            .ok_or(GameError::NotInProgress)?;
        let number = self.turn_input(console, &player)?;
        self.board.update_board(number - 1, *player.symbol());
        info!(player = %player.name(), cell = number, "Move applied");
        self.show_board(console)
    }

    fn set_up<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), GameError> {
        console.write_line(&self.presentation.intro())?;
        let first = self.create_player(console, 1, None)?;
        let second = self.create_player(console, 2, Some(*first.symbol()))?;
        info!(
            first = %first.name(),
            second = %second.name(),
            "Players ready"
        );
        self.first_player = Some(first);
        self.second_player = Some(second);
        self.current = Seat::First;
        self.enter(Phase::InProgress);
        Ok(())
    }

    fn symbol_input<C: Console + ?Sized>(
        &self,
        console: &mut C,
        banned: Option<char>,
    ) -> Result<char, GameError> {
        loop {
            console.write_line(&self.presentation.symbol_prompt())?;
            if let Some(duplicate) = banned {
                console.write_line(&self.presentation.duplicate_symbol(duplicate))?;
            }
            let answer = console.read_line()?;
            if let Some(symbol) = parse_symbol(&answer, banned) {
                return Ok(symbol);
            }
            debug!(answer = %answer, "Rejected marker");
            console.write_line(&self.presentation.input_warning())?;
        }
    }

    // The full-board guard runs before each turn and the win check right
    // after it, so a winning ninth move is still reported as a win.
    fn player_turns<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), GameError> {
        self.current = Seat::First;
        while !self.board.is_full() {
            self.turn(console)?;
            if self.board.is_game_over() {
                break;
            }
            self.current = self.current.other();
        }
        Ok(())
    }

    fn turn_input<C: Console + ?Sized>(
        &self,
        console: &mut C,
        player: &Player,
    ) -> Result<usize, GameError> {
        loop {
            console.write_line(&self.presentation.player_turn(player.name(), *player.symbol()))?;
            let answer = console.read_line()?;
            let number = coerce_number(&answer);
            if self.board.valid_move(number) {
                return Ok(number);
            }
            debug!(answer = %answer, number, "Rejected move");
            console.write_line(&self.presentation.input_warning())?;
        }
    }

    fn conclusion<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<Outcome, GameError> {
        self.enter(Phase::Concluded);
        let outcome = match self.current_player() {
            Some(player) if self.board.is_game_over() => Outcome::Winner(player.clone()),
            _ => Outcome::Draw,
        };
        let message = match &outcome {
            Outcome::Winner(player) => self.presentation.winner(player.name()),
            Outcome::Draw => self.presentation.tie(),
        };
        console.write_line(&message)?;
        info!(?outcome, symbol = ?self.board.winning_symbol(), "Game concluded");
        Ok(outcome)
    }

    fn show_board<C: Console + ?Sized>(&self, console: &mut C) -> Result<(), GameError> {
        console.write_line(&self.presentation.render_board(self.board.cells()))
    }

    fn enter(&mut self, phase: Phase) {
        debug!(from = %self.phase, to = %phase, "Phase change");
        self.phase = phase;
    }
}

/// Returns the marker if `answer` is exactly one non-digit character other
/// than `banned`.
pub fn parse_symbol(answer: &str, banned: Option<char>) -> Option<char> {
    let mut chars = answer.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) if !symbol.is_ascii_digit() && Some(symbol) != banned => Some(symbol),
        _ => None,
    }
}

/// Reads a cell number from a raw answer.
///
/// Leading whitespace and a `+` sign are skipped, then the leading digits
/// are used. An answer with no leading digits reads as 0, which is never a
/// valid cell.
pub fn coerce_number(answer: &str) -> usize {
    let trimmed = answer.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbol_accepts_single_non_digit() {
        assert_eq!(parse_symbol("X", None), Some('X'));
        assert_eq!(parse_symbol("#", Some('X')), Some('#'));
        assert_eq!(parse_symbol("é", None), Some('é'));
    }

    #[test]
    fn test_parse_symbol_rejects_bad_markers() {
        assert_eq!(parse_symbol("", None), None);
        assert_eq!(parse_symbol("XO", None), None);
        assert_eq!(parse_symbol("7", None), None);
        assert_eq!(parse_symbol("X", Some('X')), None);
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("5"), 5);
        assert_eq!(coerce_number("  7 "), 7);
        assert_eq!(coerce_number("+3"), 3);
        assert_eq!(coerce_number("4th"), 4);
        assert_eq!(coerce_number("five"), 0);
        assert_eq!(coerce_number("-2"), 0);
        assert_eq!(coerce_number(""), 0);
    }
}
