//! Text rendering of a board.

use tictac_board::Board;

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Renders the board with 1-based row and column numbers.
///
/// ```text
///   1 2 3
/// 1|X| |O|
/// 2| |X| |
/// 3| | | |
/// ```
pub fn render_board(board: &Board, clear_screen: bool) -> String {
    let mut out = String::new();
    if clear_screen {
        out.push_str(CLEAR_SCREEN);
    }

    out.push(' ');
    for col in 1..=3 {
        out.push(' ');
        out.push_str(&col.to_string());
    }
    out.push('\n');

    for (row, cells) in board.rows().enumerate() {
        out.push_str(&(row + 1).to_string());
        out.push('|');
        for cell in cells {
            out.push(cell.symbol());
            out.push('|');
        }
        out.push('\n');
    }
    out
}
