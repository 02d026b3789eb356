//! Draw detection.

use super::super::Board;
use super::win::check_winner;
use tracing::instrument;

/// Checks if every cell is claimed.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.move_count() == Board::CELL_COUNT
}

/// A full board with no complete line.
#[instrument(level = "trace", skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
