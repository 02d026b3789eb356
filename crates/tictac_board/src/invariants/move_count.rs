//! Move counter invariants.

use super::Invariant;
use crate::Board;

/// The move counter equals the number of claimed cells.
pub struct MoveCountMatchesGrid;

impl Invariant<Board> for MoveCountMatchesGrid {
    fn holds(board: &Board) -> bool {
        let claimed = board.cells().filter(|(_, cell)| !cell.is_empty()).count();
        claimed == usize::from(board.move_count())
    }

    fn description() -> &'static str {
        "Move counter equals the number of claimed cells"
    }
}

/// The move counter never exceeds the number of cells.
pub struct MoveCountBounded;

impl Invariant<Board> for MoveCountBounded {
    fn holds(board: &Board) -> bool {
        board.move_count() <= Board::CELL_COUNT
    }

    fn description() -> &'static str {
        "Move counter is at most 9"
    }
}
