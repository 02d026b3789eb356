//! Win detection.

use super::super::{Board, Cell, Line, Marker};
use tracing::instrument;

/// Returns the marker filling `line`, if all three cells match and are claimed.
pub fn line_winner(board: &Board, line: Line) -> Option<Marker> {
    let [a, b, c] = line.positions();
    let sq = board.cell(a);
    if sq != Cell::Empty && sq == board.cell(b) && sq == board.cell(c) {
        sq.marker()
    } else {
        None
    }
}

/// First complete line in scan order (rows, columns, main then anti-diagonal).
#[instrument(level = "trace", skip(board))]
pub fn winning_line(board: &Board) -> Option<Line> {
    Line::ALL
        .into_iter()
        .find(|line| line_winner(board, *line).is_some())
}

/// Checks if there is a winner on the board.
///
/// Returns the marker of the first complete line in scan order, or `None`
/// when no line is complete. `None` does not distinguish an unfinished game
/// from a draw; pair it with [`is_full`](super::is_full) for that.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Marker> {
    winning_line(board).and_then(|line| line_winner(board, line))
}
