//! The board state machine.

use super::error::MoveError;
use super::invariants;
use super::line::Line;
use super::position::Position;
use super::rules;
use super::types::{Cell, GameStatus, Marker};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// 3x3 board with its move counter.
///
/// The counter always equals the number of claimed cells. The board never
/// locks itself once a line is complete; callers check
/// [`is_game_over`](Self::is_game_over) before submitting further moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    /// Cells indexed by `[row][col]`.
    cells: [[Cell; 3]; 3],
    /// Number of successful moves so far.
    move_count: u8,
}

impl Board {
    /// Number of cells on the board.
    pub const CELL_COUNT: u8 = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
            move_count: 0,
        }
    }

    /// Claims the cell at (`row`, `col`) for `marker`.
    ///
    /// Coordinates are zero-based and need not be validated by the caller.
    /// Returns `false` without touching the board if the coordinates fall
    /// outside the grid or the cell is already claimed; the two cases are
    /// indistinguishable here. Use [`try_move`](Self::try_move) to learn
    /// which one applied.
    pub fn attempt_move(&mut self, row: i64, col: i64, marker: Marker) -> bool {
        self.try_move(row, col, marker).is_ok()
    }

    /// Claims the cell at (`row`, `col`) for `marker`, reporting why a
    /// rejected move was rejected.
    #[instrument(level = "debug", skip(self), fields(move_count = self.move_count))]
    pub fn try_move(&mut self, row: i64, col: i64, marker: Marker) -> Result<Position, MoveError> {
        let pos = Position::from_coords(row, col).ok_or_else(|| {
            debug!("Rejected move outside the board");
            MoveError::OutOfBounds { row, col }
        })?;
        self.place(pos, marker)?;
        Ok(pos)
    }

    /// Claims an already-validated position for `marker`.
    #[instrument(level = "debug", skip(self), fields(move_count = self.move_count))]
    pub fn place(&mut self, pos: Position, marker: Marker) -> Result<(), MoveError> {
        if !self.cell(pos).is_empty() {
            debug!(%pos, "Rejected move on occupied square");
            return Err(MoveError::Occupied(pos));
        }

        self.cells[pos.row()][pos.col()] = marker.into();
        self.move_count += 1;
        debug!(%pos, %marker, move_count = self.move_count, "Move accepted");

        debug_assert!(
            invariants::check_board(self).is_ok(),
            "board invariants violated after move"
        );

        if let Some(line) = self.winning_line() {
            info!(%marker, %line, "Line completed");
        } else if self.is_full() {
            info!("Board full with no line completed");
        }

        Ok(())
    }

    /// True once a line is complete or every cell is claimed.
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Marker occupying the first complete line.
    ///
    /// Scans rows 0-2, then columns 0-2, then the main diagonal, then the
    /// anti-diagonal. `None` means no line is complete, which covers both
    /// an unfinished game and a draw.
    pub fn winner(&self) -> Option<Marker> {
        rules::check_winner(self)
    }

    /// First complete line in scan order, if any.
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(self)
    }

    /// Number of successful moves, equal to the number of claimed cells.
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// True when all nine cells are claimed.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Marker due to move next, by the alternating-turn convention.
    pub fn next_marker(&self) -> Marker {
        Marker::for_move_count(self.move_count)
    }

    /// Derived game status.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(marker) => GameStatus::Won(marker),
            None if self.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Contents of the cell at `pos`.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = [Cell; 3]> + '_ {
        self.cells.iter().copied()
    }

    /// Every cell with its position, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::ALL.into_iter().map(|pos| (pos, self.cell(pos)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
