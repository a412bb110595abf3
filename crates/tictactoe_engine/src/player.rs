//! Player identity.

use derive_getters::Getters;
use derive_new::new;

/// A participant in a match: a display name and a one-character marker.
///
/// Holds no rules of its own. Marker uniqueness and shape are checked by
/// [`Game`](crate::Game) while players are set up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, new)]
pub struct Player {
    /// Name shown in prompts and results.
    #[new(into)]
    name: String,
    /// Marker placed on claimed cells.
    symbol: char,
}

/// Which of the two players a turn belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Seat {
    /// The player created first; moves first.
    #[default]
    First,
    /// The player created second.
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}
