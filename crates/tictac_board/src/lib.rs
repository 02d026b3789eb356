//! Pure tic-tac-toe board logic.
//!
//! A [`Board`] owns a fixed 3x3 grid and a move counter. Callers submit moves
//! with [`Board::attempt_move`] (plain `bool`) or [`Board::try_move`]
//! (reports the rejection reason), and query [`Board::is_game_over`],
//! [`Board::winner`] and [`Board::move_count`] to drive a game.
//!
//! # Example
//!
//! ```
//! use tictac_board::{Board, Marker};
//!
//! let mut board = Board::new();
//! assert!(board.attempt_move(0, 0, Marker::X));
//! assert!(!board.attempt_move(0, 0, Marker::O));
//! assert!(board.attempt_move(1, 1, Marker::O));
//! assert_eq!(board.move_count(), 2);
//! assert!(!board.is_game_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod line;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use board::Board;
pub use error::MoveError;
pub use line::Line;
pub use position::Position;
pub use types::{Cell, GameStatus, Marker};
