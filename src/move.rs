use std::str::FromStr;

use thiserror::Error;

use crate::position::{ParsePositionError, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Place { col: u8, row: u8 },
    Pass,
}

impl Move {
    pub fn place(col: u8, row: u8) -> Self {
        Move::Place { col, row }
    }

    pub fn pass() -> Self {
        Move::Pass
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            Move::Place { col, row } => Some(Position::new(*col, *row)),
            Move::Pass => None,
        }
    }
}

impl From<Position> for Move {
    fn from(pos: Position) -> Self {
        Move::place(pos.col, pos.row)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid move: {0}")]
pub struct ParseMoveError(#[from] ParsePositionError);

/// Accepts `pass` (or the protocol's `-`) and square names such as `d3`.
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pass" | "-" => Ok(Move::Pass),
            _ => Ok(Move::from(s.parse::<Position>()?)),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position() {
            Some(pos) => write!(f, "{}", pos),
            None => write!(f, "pass"),
        }
    }
}
