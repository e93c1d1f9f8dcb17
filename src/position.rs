//! Board coordinates and the `<file><rank>` notation used on the wire.
//!
//! Internally a [`Position`] is a `(col, row)` pair: column 0 is file `'a'`,
//! row 0 is rank `'1'`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::board::BOARD_SIZE;
use crate::direction::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub col: u8,
    pub row: u8,
}

impl Position {
    pub const fn new(col: u8, row: u8) -> Self {
        Position { col, row }
    }

    pub fn is_valid(&self) -> bool {
        self.col < BOARD_SIZE && self.row < BOARD_SIZE
    }

    /// The neighbouring position in `direction`, or `None` past the board edge.
    #[inline]
    pub fn step(&self, direction: Direction) -> Option<Position> {
        let (dc, dr) = direction.delta();
        let next = Position {
            col: self.col.checked_add_signed(dc)?,
            row: self.row.checked_add_signed(dr)?,
        };
        next.is_valid().then_some(next)
    }

    /// All 64 positions in column-major order: a1..a8, b1..b8, ..., h8.
    pub fn column_major() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|col| (0..BOARD_SIZE).map(move |row| Position::new(col, row)))
    }
}

/// Column index for a file letter `'a'..='h'`, or `None` for anything else.
pub fn column_index(file: char) -> Option<u8> {
    match file {
        'a'..='h' => Some(file as u8 - b'a'),
        _ => None,
    }
}

/// Row index for a rank digit. Callers must pass `'1'..='8'`; other input
/// produces an out-of-range row rather than an error.
pub fn row_index(rank: char) -> u8 {
    (rank as u8).wrapping_sub(b'1')
}

/// File letter for a column index, or `None` when the column is off the board.
pub fn file_letter(col: u8) -> Option<char> {
    (col < BOARD_SIZE).then(|| (b'a' + col) as char)
}

/// Rank digit for a row index, or `None` when the row is off the board.
pub fn rank_digit(row: u8) -> Option<char> {
    (row < BOARD_SIZE).then(|| (b'1' + row) as char)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePositionError {
    #[error("expected two characters, got {0:?}")]
    Length(String),
    #[error("invalid file {0:?}, expected 'a'..='h'")]
    File(char),
    #[error("invalid rank {0:?}, expected '1'..='8'")]
    Rank(char),
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(ParsePositionError::Length(s.to_string())),
        };

        let col = column_index(file).ok_or(ParsePositionError::File(file))?;
        if !('1'..='8').contains(&rank) {
            return Err(ParsePositionError::Rank(rank));
        }

        Ok(Position::new(col, row_index(rank)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (file_letter(self.col), rank_digit(self.row)) {
            (Some(file), Some(rank)) => write!(f, "{}{}", file, rank),
            _ => write!(f, "({}, {})", self.col, self.row),
        }
    }
}
