//! English console text for the game.

use tictactoe_engine::{CELL_COUNT, Cell, Presentation};

const BOARD_INDENT: &str = "      ";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Messages shown in the terminal.
///
/// Warnings are printed in red unless color is turned off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsolePresentation {
    color: bool,
}

impl ConsolePresentation {
    /// Creates the presentation, with or without ANSI colors.
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Default for ConsolePresentation {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Presentation for ConsolePresentation {
    fn intro(&self) -> String {
        "Let's play a simple Tic-Tac-Toe game in the console! \n".to_string()
    }

    fn name_prompt(&self, number: u8) -> String {
        format!("What is the name of player #{number}?")
    }

    fn symbol_prompt(&self) -> String {
        "What 1 letter (or special character) would you like to be your game marker?".to_string()
    }

    fn duplicate_symbol(&self, duplicate: char) -> String {
        format!("It can not be '{duplicate}'")
    }

    fn input_warning(&self) -> String {
        let text = "Sorry, that is an invalid answer. Please, try again.";
        if self.color {
            format!("{RED}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn player_turn(&self, name: &str, symbol: char) -> String {
        format!("{name}, please enter a number (1-9) that is available to place an '{symbol}'")
    }

    fn winner(&self, name: &str) -> String {
        format!("GAME OVER! {name} is the winner!")
    }

    fn tie(&self) -> String {
        "It's a draw".to_string()
    }

    fn replay_prompt(&self) -> String {
        "Would you like to play a new game? Press 'y' for yes or 'n' for no.".to_string()
    }

    fn farewell(&self) -> String {
        "Thanks for playing!".to_string()
    }

    fn render_board(&self, cells: &[Cell; CELL_COUNT]) -> String {
        let divider = format!("\n{BOARD_INDENT}---+---+---\n");
        let rows: Vec<String> = cells
            .chunks(3)
            .map(|row| format!("{BOARD_INDENT} {} | {} | {}", row[0], row[1], row[2]))
            .collect();
        format!("\n{}\n", rows.join(&divider))
    }
}
