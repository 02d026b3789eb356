//! Game rules.
//!
//! Pure functions that evaluate a board. They never mutate it, so the
//! board's own queries and any caller can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, line_winner, winning_line};
