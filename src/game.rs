use log::{debug, warn};

use crate::board::Board;
use crate::engine;
use crate::player::Player;
use crate::position::Position;
use crate::r#move::Move;

/// One game in progress: the board, whose turn it is, and what has been played.
///
/// House rules: passing is always allowed, even with a placement available,
/// and the game never ends on its own. Whoever drives the game decides when
/// to stop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Player,
    move_history: Vec<Move>,
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::initial(), Player::Black)
    }

    /// Start from an arbitrary position with `to_move` on turn.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        Game {
            board,
            current_player: to_move,
            move_history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.current_player
    }

    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    pub fn get_piece(&self, pos: &Position) -> Option<Player> {
        self.board.get_piece(pos)
    }

    pub fn count(&self, player: Player) -> u8 {
        self.board.count(player)
    }

    /// Squares the side to move can play, in column-major order.
    pub fn legal_targets(&self) -> Vec<Position> {
        engine::legal_targets(&self.board, self.current_player)
    }

    /// All legal placements followed by [`Move::Pass`], which is always legal.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves: Vec<Move> = self.legal_targets().into_iter().map(Move::from).collect();
        moves.push(Move::pass());
        moves
    }

    pub fn is_legal_move(&self, move_: &Move) -> bool {
        match move_.position() {
            None => true,
            Some(pos) => engine::is_legal_move(&self.board, pos, self.current_player),
        }
    }

    /// Play `move_` for the side to move and hand the turn over.
    ///
    /// Returns `false`, leaving the game untouched, if the move is illegal.
    pub fn make_move(&mut self, move_: &Move) -> bool {
        if !self.is_legal_move(move_) {
            warn!("{} cannot play {}", self.current_player, move_);
            return false;
        }

        match move_.position() {
            Some(pos) => {
                let flipped = engine::apply_move(&mut self.board, pos, self.current_player);
                debug!("{} played {}, flipping {}", self.current_player, pos, flipped);
            }
            None => debug!("{} passed", self.current_player),
        }

        self.move_history.push(*move_);
        self.current_player = self.current_player.opposite();
        true
    }

    /// Hand the turn over without touching the board. Always succeeds.
    pub fn pass(&mut self) {
        let passed = self.make_move(&Move::pass());
        debug_assert!(passed, "a pass is always legal");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Game(turn: {}, moves: {}, black: {}, white: {})\n{}",
            self.current_player,
            self.move_count(),
            self.count(Player::Black),
            self.count(Player::White),
            self.board
        )
    }
}
