//! Move source: reads 1-based `row col` pairs from a line-oriented reader.

use std::io::{BufRead, Read};
use tracing::{debug, instrument, trace};

/// Error produced while reading a move.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum InputError {
    /// The line did not contain exactly two integers.
    #[display("Could not read a move from {:?}", _0)]
    Parse(String),

    /// The reader reached end of input.
    #[display("Input closed before the game finished")]
    Closed,

    /// The underlying reader failed.
    #[display("I/O error: {}", _0)]
    #[from]
    Io(std::io::Error),
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// A move as typed by the player: 1-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypedMove {
    /// 1-based row.
    pub row: i64,
    /// 1-based column.
    pub col: i64,
}

impl TypedMove {
    /// Zero-based (row, col), ready for the board. Not range-checked.
    pub fn to_zero_based(self) -> (i64, i64) {
        (self.row.saturating_sub(1), self.col.saturating_sub(1))
    }
}

/// Parses `"row col"` or `"row,col"`.
///
/// Only the shape is checked here; the board decides whether the numbers
/// name a real, free cell.
pub fn parse_move(line: &str) -> Result<TypedMove, InputError> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());

    let parse_error = || InputError::Parse(line.trim().to_string());
    let row = parts.next().ok_or_else(parse_error)?;
    let col = parts.next().ok_or_else(parse_error)?;
    if parts.next().is_some() {
        return Err(parse_error());
    }

    let row = row.parse::<i64>().map_err(|_| parse_error())?;
    let col = col.parse::<i64>().map_err(|_| parse_error())?;
    Ok(TypedMove { row, col })
}

/// Longest line accepted as a move, newline included.
pub const MAX_LINE_LEN: usize = 256;

/// Reads moves one line at a time.
pub struct MoveSource<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> MoveSource<R> {
    /// Wraps a reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(MAX_LINE_LEN),
        }
    }

    /// Reads and parses the next line.
    ///
    /// Lines that are not UTF-8 or exceed [`MAX_LINE_LEN`] are rejected as
    /// [`InputError::Parse`]; the rest of an overlong line is discarded.
    #[instrument(level = "trace", skip(self))]
    pub fn next_move(&mut self) -> Result<TypedMove, InputError> {
        self.buf.clear();
        let read = (&mut self.reader)
            .take(MAX_LINE_LEN as u64)
            .read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Err(InputError::Closed);
        }

        if read == MAX_LINE_LEN && self.buf.last() != Some(&b'\n') {
            self.discard_rest_of_line()?;
            debug!(limit = MAX_LINE_LEN, "Discarded overlong input line");
            return Err(InputError::Parse(format!(
                "{}...",
                String::from_utf8_lossy(&self.buf[..16])
            )));
        }

        let line = std::str::from_utf8(&self.buf)
            .map_err(|_| InputError::Parse(String::from_utf8_lossy(&self.buf).trim().to_string()))?;
        trace!(line = %line.trim_end(), "Read input line");
        parse_move(line)
    }

    /// Consumes bytes up to and including the next newline without buffering them.
    fn discard_rest_of_line(&mut self) -> Result<(), InputError> {
        loop {
            let chunk = self.reader.fill_buf()?;
            if chunk.is_empty() {
                return Ok(());
            }
            match chunk.iter().position(|b| *b == b'\n') {
                Some(idx) => {
                    self.reader.consume(idx + 1);
                    return Ok(());
                }
                None => {
                    let len = chunk.len();
                    self.reader.consume(len);
                }
            }
        }
    }
}
