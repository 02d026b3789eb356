//! Move rejection reasons.

use super::position::Position;

/// Reason a move was rejected.
///
/// [`Board::attempt_move`](crate::Board::attempt_move) collapses both
/// variants into a plain `false`; [`Board::try_move`](crate::Board::try_move)
/// reports which one applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinates fall outside the 3x3 grid.
    #[display("Coordinates ({}, {}) are outside the board", row, col)]
    OutOfBounds {
        /// Requested zero-based row.
        row: i64,
        /// Requested zero-based column.
        col: i64,
    },

    /// The target cell is already claimed.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),
}

impl std::error::Error for MoveError {}
