pub mod board;
pub mod direction;
pub mod engine;
pub mod game;
pub mod r#move;
pub mod player;
pub mod position;
pub mod protocol;

#[cfg(feature = "serde")]
pub mod serde_support;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn reversi_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use player::Player;
    use python_bindings::*;
    m.add_class::<PyBoard>()?;
    m.add_class::<PyGame>()?;
    m.add_class::<PyMove>()?;
    m.add("BLACK", Player::Black as i8)?;
    m.add("WHITE", Player::White as i8)?;
    m.add("BOARD_SIZE", board::BOARD_SIZE)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use crate::board::Board;
    use crate::direction::Direction;
    use crate::engine;
    use crate::game::Game;
    use crate::player::Player;
    use crate::position::Position;
    use crate::r#move::Move;

    fn player_from_int(value: i8) -> PyResult<Player> {
        Player::from_int(value).ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Invalid player value: {}",
                value
            ))
        })
    }

    fn position_from_coords(col: usize, row: usize) -> PyResult<Position> {
        let pos = Position::new(col.min(u8::MAX as usize) as u8, row.min(u8::MAX as usize) as u8);
        if !pos.is_valid() {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                "Position must be within 0..8 on both axes",
            ));
        }
        Ok(pos)
    }

    fn to_coords(positions: Vec<Position>) -> Vec<(usize, usize)> {
        positions
            .into_iter()
            .map(|p| (p.col as usize, p.row as usize))
            .collect()
    }

    #[pyclass(name = "Board")]
    #[derive(Clone)]
    pub struct PyBoard {
        board: Board,
    }

    #[pymethods]
    impl PyBoard {
        #[new]
        pub fn new() -> Self {
            PyBoard {
                board: Board::initial(),
            }
        }

        #[staticmethod]
        pub fn parse(text: &str) -> PyResult<Self> {
            text.parse()
                .map(|board| PyBoard { board })
                .map_err(|e: crate::board::ParseBoardError| {
                    PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
                })
        }

        pub fn get_piece(&self, col: usize, row: usize) -> PyResult<Option<i8>> {
            let pos = position_from_coords(col, row)?;
            Ok(self.board.get_piece(&pos).map(|p| p as i8))
        }

        pub fn count(&self, player: i8) -> PyResult<u8> {
            Ok(self.board.count(player_from_int(player)?))
        }

        pub fn legal_targets(&self, player: i8) -> PyResult<Vec<(usize, usize)>> {
            let player = player_from_int(player)?;
            Ok(to_coords(engine::legal_targets(&self.board, player)))
        }

        pub fn is_legal_move(&self, col: usize, row: usize, player: i8) -> PyResult<bool> {
            let pos = position_from_coords(col, row)?;
            Ok(engine::is_legal_move(&self.board, pos, player_from_int(player)?))
        }

        /// Names of the capturing directions ("N", "SE", ...) for a move.
        pub fn legal_directions(&self, col: usize, row: usize, player: i8) -> PyResult<Vec<String>> {
            let pos = position_from_coords(col, row)?;
            let player = player_from_int(player)?;
            Ok(engine::legal_directions(&self.board, pos, player)
                .into_iter()
                .map(|d: Direction| d.to_string())
                .collect())
        }

        /// Play a legal move and return the number of flipped pieces.
        pub fn apply_move(&mut self, col: usize, row: usize, player: i8) -> PyResult<usize> {
            let pos = position_from_coords(col, row)?;
            let player = player_from_int(player)?;
            if !engine::is_legal_move(&self.board, pos, player) {
                return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                    "{} is not a legal move for {}",
                    pos, player
                )));
            }
            Ok(engine::apply_move(&mut self.board, pos, player))
        }

        pub fn __str__(&self) -> String {
            self.board.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Board(black={}, white={})",
                self.board.count(Player::Black),
                self.board.count(Player::White)
            )
        }
    }

    #[pyclass(name = "Game")]
    pub struct PyGame {
        game: Game,
    }

    #[pymethods]
    impl PyGame {
        #[new]
        pub fn new() -> Self {
            PyGame { game: Game::new() }
        }

        pub fn turn(&self) -> i8 {
            self.game.turn() as i8
        }

        pub fn move_count(&self) -> usize {
            self.game.move_count()
        }

        pub fn count(&self, player: i8) -> PyResult<u8> {
            Ok(self.game.count(player_from_int(player)?))
        }

        pub fn legal_targets(&self) -> Vec<(usize, usize)> {
            to_coords(self.game.legal_targets())
        }

        pub fn legal_moves(&self) -> Vec<PyMove> {
            self.game
                .legal_moves()
                .into_iter()
                .map(|m| PyMove { move_: m })
                .collect()
        }

        pub fn is_legal_move(&self, move_: &PyMove) -> bool {
            self.game.is_legal_move(&move_.move_)
        }

        pub fn make_move(&mut self, move_: &PyMove) -> bool {
            self.game.make_move(&move_.move_)
        }

        pub fn pass_turn(&mut self) {
            self.game.pass()
        }

        pub fn board(&self) -> PyBoard {
            PyBoard {
                board: *self.game.board(),
            }
        }

        /// The protocol prompt for the side to move, e.g. "C c4 d3 e6 f5".
        pub fn prompt(&self) -> String {
            crate::protocol::format_prompt(self.game.turn(), &self.game.legal_targets())
        }

        pub fn clone(&self) -> PyGame {
            PyGame {
                game: self.game.clone(),
            }
        }

        pub fn __str__(&self) -> String {
            self.game.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Game(turn={:?}, moves={})",
                self.game.turn(),
                self.game.move_count()
            )
        }
    }

    #[pyclass(name = "Move")]
    #[derive(Clone, Debug)]
    pub struct PyMove {
        move_: Move,
    }

    #[pymethods]
    impl PyMove {
        #[staticmethod]
        pub fn place(col: usize, row: usize) -> PyResult<Self> {
            let pos = position_from_coords(col, row)?;
            Ok(PyMove {
                move_: Move::from(pos),
            })
        }

        #[staticmethod]
        pub fn pass_move() -> Self {
            PyMove {
                move_: Move::pass(),
            }
        }

        #[staticmethod]
        pub fn parse(notation: &str) -> PyResult<Self> {
            notation
                .parse()
                .map(|move_| PyMove { move_ })
                .map_err(|e: crate::r#move::ParseMoveError| {
                    PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
                })
        }

        pub fn is_pass(&self) -> bool {
            self.move_.is_pass()
        }

        pub fn col(&self) -> Option<usize> {
            self.move_.position().map(|p| p.col as usize)
        }

        pub fn row(&self) -> Option<usize> {
            self.move_.position().map(|p| p.row as usize)
        }

        pub fn __str__(&self) -> String {
            self.move_.to_string()
        }

        pub fn __repr__(&self) -> String {
            match self.move_.position() {
                Some(pos) => format!("Move.place({}, {})", pos.col, pos.row),
                None => "Move.pass_move()".to_string(),
            }
        }

        pub fn __eq__(&self, other: &PyMove) -> bool {
            self.move_ == other.move_
        }

        pub fn __hash__(&self) -> u64 {
            use std::hash::{Hash, Hasher};
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            self.move_.hash(&mut hasher);
            hasher.finish()
        }
    }
}
