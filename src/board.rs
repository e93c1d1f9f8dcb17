use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::player::Player;
use crate::position::{file_letter, Position};

pub const BOARD_SIZE: u8 = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Contents of a single square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn to_char(self) -> char {
        self.player().map_or('.', |p| p.to_char())
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// An 8×8 Reversi board stored as `cells[row][col]`.
///
/// Squares only ever go from empty to occupied: there is deliberately no way
/// to clear a square once a piece has been placed on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// The starting position: d4=white, e4=black, d5=black, e5=white.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        board.set_piece(&Position::new(3, 3), Player::White);
        board.set_piece(&Position::new(4, 3), Player::Black);
        board.set_piece(&Position::new(3, 4), Player::Black);
        board.set_piece(&Position::new(4, 4), Player::White);
        board
    }

    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Off-board positions read as empty.
    #[inline]
    pub fn cell(&self, pos: &Position) -> Cell {
        if pos.is_valid() {
            self.cells[pos.row as usize][pos.col as usize]
        } else {
            Cell::Empty
        }
    }

    #[inline]
    pub fn get_piece(&self, pos: &Position) -> Option<Player> {
        self.cell(pos).player()
    }

    /// Place or recolour a piece. Off-board positions are ignored.
    #[inline]
    pub fn set_piece(&mut self, pos: &Position, player: Player) {
        if pos.is_valid() {
            self.cells[pos.row as usize][pos.col as usize] = Cell::from(player);
        }
    }

    pub fn count(&self, player: Player) -> u8 {
        let target = Cell::from(player);
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == target)
            .count() as u8
    }

    pub fn empty_count(&self) -> u8 {
        NUM_SQUARES as u8 - self.count(Player::Black) - self.count(Player::White)
    }

    /// Rows of cells, rank 1 first.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE as usize]> {
        self.cells.iter()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("expected {expected} ranks, found {found}")]
    RankCount { expected: usize, found: usize },
    #[error("rank {rank}: expected {expected} squares, found {found}")]
    RankLength {
        rank: usize,
        expected: usize,
        found: usize,
    },
    #[error("rank {rank}: unexpected square {found:?}")]
    Square { rank: usize, found: char },
}

/// Parses eight lines of `.`, `B` and `W`, rank 1 first. Blank lines and
/// surrounding whitespace are ignored.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ranks: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if ranks.len() != BOARD_SIZE as usize {
            return Err(ParseBoardError::RankCount {
                expected: BOARD_SIZE as usize,
                found: ranks.len(),
            });
        }

        let mut board = Board::empty();
        for (row, line) in ranks.iter().enumerate() {
            let found = line.chars().count();
            if found != BOARD_SIZE as usize {
                return Err(ParseBoardError::RankLength {
                    rank: row + 1,
                    expected: BOARD_SIZE as usize,
                    found,
                });
            }

            for (col, c) in line.chars().enumerate() {
                if c == '.' {
                    continue;
                }
                let player = Player::from_char(c).ok_or(ParseBoardError::Square {
                    rank: row + 1,
                    found: c,
                })?;
                board.set_piece(&Position::new(col as u8, row as u8), player);
            }
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", file_letter(col).unwrap_or(' '))?;
        }
        writeln!(f)?;

        for (row, cells) in self.rows().enumerate() {
            write!(f, "{}", row + 1)?;
            for cell in cells {
                write!(f, " {}", cell.to_char())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board_has_four_centre_pieces() {
        let board = Board::initial();

        assert_eq!(board.cell(&Position::new(3, 3)), Cell::White);
        assert_eq!(board.cell(&Position::new(4, 3)), Cell::Black);
        assert_eq!(board.cell(&Position::new(3, 4)), Cell::Black);
        assert_eq!(board.cell(&Position::new(4, 4)), Cell::White);

        assert_eq!(board.count(Player::Black), 2);
        assert_eq!(board.count(Player::White), 2);
        assert_eq!(board.empty_count(), 60);
    }

    #[test]
    fn test_initial_board_in_notation() {
        let board = Board::initial();
        let at = |s: &str| board.cell(&s.parse().expect("valid position"));

        assert_eq!(at("d4"), Cell::White);
        assert_eq!(at("e4"), Cell::Black);
        assert_eq!(at("d5"), Cell::Black);
        assert_eq!(at("e5"), Cell::White);
    }

    #[test]
    fn test_off_board_reads_empty() {
        let board = Board::initial();
        assert_eq!(board.cell(&Position::new(8, 0)), Cell::Empty);
        assert_eq!(board.get_piece(&Position::new(0, 200)), None);
    }

    #[test]
    fn test_set_piece_off_board_is_ignored() {
        let mut board = Board::initial();
        board.set_piece(&Position::new(8, 8), Player::Black);
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn test_parse_matches_initial() {
        let board: Board = "
            ........
            ........
            ........
            ...WB...
            ...BW...
            ........
            ........
            ........
        "
        .parse()
        .expect("valid board");

        assert_eq!(board, Board::initial());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "........".parse::<Board>(),
            Err(ParseBoardError::RankCount {
                expected: 8,
                found: 1
            })
        );

        let short_rank = "........\n".repeat(7) + ".......";
        assert_eq!(
            short_rank.parse::<Board>(),
            Err(ParseBoardError::RankLength {
                rank: 8,
                expected: 8,
                found: 7
            })
        );

        let bad_square = "...X....\n".to_string() + &"........\n".repeat(7);
        assert_eq!(
            bad_square.parse::<Board>(),
            Err(ParseBoardError::Square {
                rank: 1,
                found: 'X'
            })
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let board = Board::initial();
        let text = board.to_string();
        let grid: String = text
            .lines()
            .skip(1)
            .map(|line| line.chars().skip(1).filter(|c| !c.is_whitespace()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");

        assert_eq!(grid.parse::<Board>(), Ok(board));
    }
}
