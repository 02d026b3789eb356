//! Core domain types for the board.

use serde::{Deserialize, Serialize};

/// A player's claim symbol.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Marker {
    /// Marker X (moves first).
    #[display("X")]
    X,
    /// Marker O (moves second).
    #[display("O")]
    O,
}

impl Marker {
    /// Character used when drawing this marker.
    pub fn symbol(self) -> char {
        match self {
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }

    /// Marker whose turn it is after `move_count` moves.
    ///
    /// X plays on even counts, O on odd counts.
    pub fn for_move_count(move_count: u8) -> Self {
        if move_count % 2 == 0 {
            Marker::X
        } else {
            Marker::O
        }
    }
}

/// One grid position's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Unclaimed cell.
    #[default]
    Empty,
    /// Cell claimed by a marker.
    Occupied(Marker),
}

impl Cell {
    /// Returns true if no marker has claimed this cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the claiming marker, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }

    /// Character used when drawing this cell; empty cells are blank.
    pub fn symbol(self) -> char {
        self.marker().map_or(' ', Marker::symbol)
    }
}

impl From<Marker> for Cell {
    fn from(marker: Marker) -> Self {
        Cell::Occupied(marker)
    }
}

/// Derived status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No line is complete and free cells remain.
    InProgress,
    /// A line is complete.
    Won(Marker),
    /// All cells are claimed and no line is complete.
    Draw,
}

impl GameStatus {
    /// Winning marker, if the game was won.
    pub fn winner(self) -> Option<Marker> {
        match self {
            GameStatus::Won(marker) => Some(marker),
            _ => None,
        }
    }
}
