//! Terminal front end for [`tictac_board`].
//!
//! The board crate holds the rules; this crate supplies the pieces around it:
//!
//! - **cli**: command-line arguments
//! - **config**: defaults, TOML file and CLI overrides
//! - **render**: text drawing of the grid
//! - **input**: reading `row col` moves
//! - **session**: the loop that ties them together

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod input;
pub mod render;
pub mod session;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig, PlayerNames};
pub use input::{InputError, MoveSource, TypedMove, parse_move};
pub use render::render_board;
pub use session::{SessionError, play};
