//! Text the game shows to players.

use crate::{CELL_COUNT, Cell};

/// Supplies every message the game displays.
///
/// Implementations only build strings. Deciding when to show them, and
/// writing them out, is the job of [`Game`](crate::Game).
pub trait Presentation {
    /// Greeting shown once before players are created.
    fn intro(&self) -> String;

    /// Asks for the name of player `number` (1 or 2).
    fn name_prompt(&self, number: u8) -> String;

    /// Asks for a one-character marker.
    fn symbol_prompt(&self) -> String;

    /// Reminds the second player that `duplicate` is taken.
    fn duplicate_symbol(&self, duplicate: char) -> String;

    /// Shown after any rejected answer.
    fn input_warning(&self) -> String;

    /// Asks `name` for a cell number to mark with `symbol`.
    fn player_turn(&self, name: &str, symbol: char) -> String;

    /// Announces the winner.
    fn winner(&self, name: &str) -> String;

    /// Announces a draw.
    fn tie(&self) -> String;

    /// Asks whether to start another match.
    fn replay_prompt(&self) -> String;

    /// Shown when the player declines another match.
    fn farewell(&self) -> String;

    /// Renders the cells (row-major) as a 3x3 grid.
    fn render_board(&self, cells: &[Cell; CELL_COUNT]) -> String {
        let rows: Vec<String> = cells
            .chunks(3)
            .map(|row| format!(" {} | {} | {}", row[0], row[1], row[2]))
            .collect();
        format!("\n{}\n", rows.join("\n---+---+---\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    struct Silent;

    impl Presentation for Silent {
        fn intro(&self) -> String {
            String::new()
        }
        fn name_prompt(&self, _number: u8) -> String {
            String::new()
        }
        fn symbol_prompt(&self) -> String {
            String::new()
        }
        fn duplicate_symbol(&self, _duplicate: char) -> String {
            String::new()
        }
        fn input_warning(&self) -> String {
            String::new()
        }
        fn player_turn(&self, _name: &str, _symbol: char) -> String {
            String::new()
        }
        fn winner(&self, _name: &str) -> String {
            String::new()
        }
        fn tie(&self) -> String {
            String::new()
        }
        fn replay_prompt(&self) -> String {
            String::new()
        }
        fn farewell(&self) -> String {
            String::new()
        }
    }

    #[test]
    fn test_default_render_fresh_board() {
        let rendered = Silent.render_board(Board::new().cells());
        assert_eq!(
            rendered,
            "\n 1 | 2 | 3\n---+---+---\n 4 | 5 | 6\n---+---+---\n 7 | 8 | 9\n"
        );
    }

    #[test]
    fn test_default_render_shows_markers() {
        let mut board = Board::new();
        board.update_board(0, 'X');
        board.update_board(4, 'O');
        let rendered = Silent.render_board(board.cells());
        assert!(rendered.contains(" X | 2 | 3"));
        assert!(rendered.contains(" 4 | O | 6"));
    }
}
