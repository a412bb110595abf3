//! Board state and terminal-condition evaluation for tic-tac-toe.

use derive_more::Display;
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Index triples that win the game when all three cells hold the same marker.
pub const WINNING_COMBOS: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A single cell on the board.
///
/// An unclaimed cell carries its own 1-based position, so two empty cells
/// never compare equal. Win detection relies on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Cell {
    /// Unclaimed cell labelled with its position (1-9).
    #[display("{_0}")]
    Empty(u8),
    /// Cell claimed by a player's marker.
    #[display("{_0}")]
    Marked(char),
}

impl Cell {
    /// Returns true once a player has claimed this cell.
    pub fn is_marked(&self) -> bool {
        matches!(self, Cell::Marked(_))
    }

    /// Returns the marker in this cell, if any.
    pub fn symbol(&self) -> Option<char> {
        match self {
            Cell::Marked(symbol) => Some(*symbol),
            Cell::Empty(_) => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a board where every cell is empty and labelled 1 through 9.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|i| Cell::Empty(i as u8 + 1)),
        }
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Writes `symbol` into the cell at the 0-based `index`.
    ///
    /// Performs no legality check; callers validate with [`Board::valid_move`]
    /// first. An index past the board is ignored.
    #[instrument(skip(self))]
    pub fn update_board(&mut self, index: usize, symbol: char) {
        match self.cells.get_mut(index) {
            Some(cell) => *cell = Cell::Marked(symbol),
            None => debug!(index, "Ignoring update outside the board"),
        }
    }

    /// Returns true if the 1-based `number` names a cell that is still unclaimed.
    ///
    /// Numbers outside 1-9 are never valid.
    #[instrument(skip(self))]
    pub fn valid_move(&self, number: usize) -> bool {
        let Some(index) = number.checked_sub(1) else {
            return false;
        };
        matches!(self.cells.get(index), Some(Cell::Empty(label)) if usize::from(*label) == number)
    }

    /// Returns true when every cell has been claimed.
    #[instrument(skip(self))]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Cell::is_marked)
    }

    /// Returns true when some winning combo holds three identical cells.
    #[instrument(skip(self))]
    pub fn is_game_over(&self) -> bool {
        self.winning_combo().is_some()
    }

    /// Returns the first winning combo whose three cells are identical.
    pub fn winning_combo(&self) -> Option<[usize; 3]> {
        WINNING_COMBOS.into_iter().find(|&[a, b, c]| {
            self.cells[a] == self.cells[b] && self.cells[b] == self.cells[c]
        })
    }

    /// Returns the marker that completed a winning combo, if any.
    pub fn winning_symbol(&self) -> Option<char> {
        self.winning_combo()
            .and_then(|[a, _, _]| self.cells[a].symbol())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
