//! The driving loop: render, prompt, read, submit, until the game is over.

use crate::config::GameConfig;
use crate::input::{InputError, MoveSource};
use crate::render::render_board;
use std::io::{BufRead, Write};
use tictac_board::{Board, GameStatus};
use tracing::{debug, info, instrument, warn};

/// Error that ends a session early.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum SessionError {
    /// The move source failed or closed.
    #[display("{}", _0)]
    Input(InputError),

    /// Writing to the output failed.
    #[display("Output error: {}", _0)]
    Output(std::io::Error),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Input(e) => Some(e),
            SessionError::Output(e) => Some(e),
        }
    }
}

/// Plays `board` to completion with moves read from `input`.
///
/// Rejected moves (unparsable, off the board, or on a claimed cell) print a
/// notice and re-prompt the same player. Returns the final status.
#[instrument(skip_all, fields(start_moves = board.move_count()))]
pub fn play<R, W>(
    board: &mut Board,
    input: R,
    output: &mut W,
    config: &GameConfig,
) -> Result<GameStatus, SessionError>
where
    R: BufRead,
    W: Write,
{
    let mut source = MoveSource::new(input);

    while !board.is_game_over() {
        write!(output, "{}", render_board(board, *config.clear_screen()))?;

        let marker = board.next_marker();
        write!(output, "Enter row and column for [{}] (example:1 1): ", marker)?;
        output.flush()?;

        let typed = match source.next_move() {
            Ok(typed) => typed,
            Err(InputError::Parse(line)) => {
                debug!(%line, "Unparsable move");
                writeln!(output, "Invalid move. Please try again.")?;
                continue;
            }
            Err(e) => {
                warn!(error = %e, "Move source ended");
                return Err(e.into());
            }
        };

        let (row, col) = typed.to_zero_based();
        if let Err(reason) = board.try_move(row, col, marker) {
            debug!(%reason, "Move rejected");
            writeln!(output, "Invalid move. Please try again.")?;
        }
    }

    write!(output, "{}", render_board(board, *config.clear_screen()))?;
    let status = board.status();
    match status.winner() {
        Some(marker) => writeln!(
            output,
            "Game over. Player {} wins!",
            config.players().label(marker)
        )?,
        None => writeln!(output, "Game over. It's a tie!")?,
    }

    info!(?status, moves = board.move_count(), "Game finished");
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictac_board::Marker;

    fn quiet() -> GameConfig {
        GameConfig::from_toml("clear_screen = false").unwrap()
    }

    fn run(script: &str) -> (Result<GameStatus, SessionError>, String) {
        let mut board = Board::new();
        let mut out = Vec::new();
        let result = play(&mut board, Cursor::new(script), &mut out, &quiet());
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_x_wins_top_row() {
        let (result, out) = run("1 1\n2 1\n1 2\n2 2\n1 3\n");
        assert_eq!(result.unwrap(), GameStatus::Won(Marker::X));
        assert!(out.ends_with("1|X|X|X|\n2|O|O| |\n3| | | |\nGame over. Player X wins!\n"));
    }

    #[test]
    fn test_prompt_alternates_markers() {
        let (_, out) = run("1 1\n2 1\n1 2\n2 2\n1 3\n");
        assert_eq!(out.matches("Enter row and column for [X]").count(), 3);
        assert_eq!(out.matches("Enter row and column for [O]").count(), 2);
    }

    #[test]
    fn test_rejections_reprompt_same_player() {
        // Off the board, garbage, occupied; then a normal X win.
        let (result, out) = run("4 4\nhello\n1 1\n1 1\n2 1\n1 2\n2 2\n1 3\n");
        assert_eq!(result.unwrap(), GameStatus::Won(Marker::X));
        assert_eq!(out.matches("Invalid move. Please try again.").count(), 3);
    }

    #[test]
    fn test_non_utf8_line_reprompts() {
        let mut board = Board::new();
        let mut out = Vec::new();
        let script = &b"\xff\xfe 1\n1 1\n2 1\n1 2\n2 2\n1 3\n"[..];
        let status = play(&mut board, Cursor::new(script), &mut out, &quiet()).unwrap();

        assert_eq!(status, GameStatus::Won(Marker::X));
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("Invalid move. Please try again.").count(), 1);
    }

    #[test]
    fn test_overlong_line_reprompts() {
        let script = format!("{}\n1 1\n2 1\n1 2\n2 2\n1 3\n", "9 ".repeat(1000));
        let (result, out) = run(&script);
        assert_eq!(result.unwrap(), GameStatus::Won(Marker::X));
        assert_eq!(out.matches("Invalid move. Please try again.").count(), 1);
    }

    #[test]
    fn test_tie() {
        let (result, out) = run("1 1\n1 2\n1 3\n2 2\n2 1\n3 1\n3 2\n2 3\n3 3\n");
        assert_eq!(result.unwrap(), GameStatus::Draw);
        assert!(out.ends_with("Game over. It's a tie!\n"));
    }

    #[test]
    fn test_closed_input_is_error() {
        let (result, _) = run("1 1\n");
        assert!(matches!(result, Err(SessionError::Input(InputError::Closed))));
    }
}
