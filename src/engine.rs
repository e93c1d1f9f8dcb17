//! Move legality and piece flipping.
//!
//! Every function here is a pure function of the board it is handed (apart
//! from the in-place mutation done by [`flip_direction`] and [`apply_move`]).
//! There is no notion of whose turn it is; the caller passes the mover.
//!
//! A capture along a [`Direction`] is a non-empty run of opponent pieces
//! starting right next to the target square and ending at one of the mover's
//! own pieces. The eight directions are evaluated independently.

use log::debug;

use crate::board::Board;
use crate::direction::{Direction, Ray};
use crate::player::Player;
use crate::position::Position;

/// Whether placing `player` at `origin` would capture along `direction`.
///
/// The origin square itself is never inspected, so the result is the same
/// whether or not a piece already stands on it.
pub fn is_legal_in_direction(
    board: &Board,
    origin: Position,
    player: Player,
    direction: Direction,
) -> bool {
    let opponent = player.opposite();
    let mut ray = Ray::new(origin, direction).map(|pos| board.get_piece(&pos));

    // At least one opponent piece has to sit right next to the origin.
    if ray.next() != Some(Some(opponent)) {
        return false;
    }

    for piece in ray {
        match piece {
            Some(p) if p == opponent => continue,
            Some(_) => return true,
            None => return false,
        }
    }

    // Ran off the board inside the opponent's run.
    false
}

/// Recolour the run of opponent pieces next to `origin` along `direction`.
///
/// Callers must have checked [`is_legal_in_direction`] first; on an illegal
/// direction this recolours whatever opponent run it finds up to the first
/// non-opponent square or the edge. Returns the number of flipped pieces.
pub fn flip_direction(
    board: &mut Board,
    origin: Position,
    player: Player,
    direction: Direction,
) -> usize {
    let opponent = player.opposite();
    let mut flipped = 0;

    for pos in Ray::new(origin, direction) {
        if board.get_piece(&pos) != Some(opponent) {
            break;
        }
        board.set_piece(&pos, player);
        flipped += 1;
    }

    flipped
}

/// Place `player` at `origin` and flip every captured run.
///
/// The piece is placed before the eight directions are tested. This cannot
/// change which directions capture: [`is_legal_in_direction`] starts one
/// square past the origin, and rays from a single origin share no square
/// other than the origin, so one direction's flips never affect another's
/// test.
///
/// Callers must only pass an empty `origin` with at least one legal
/// direction; nothing is re-checked here. Returns the number of flipped pieces.
pub fn apply_move(board: &mut Board, origin: Position, player: Player) -> usize {
    board.set_piece(&origin, player);

    let mut flipped = 0;
    for direction in Direction::ALL {
        if is_legal_in_direction(board, origin, player, direction) {
            let run = flip_direction(board, origin, player, direction);
            debug!("{} at {}: flipped {} toward {}", player, origin, run, direction);
            flipped += run;
        }
    }

    flipped
}

/// The directions in which a move at `origin` would capture.
pub fn legal_directions(board: &Board, origin: Position, player: Player) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| is_legal_in_direction(board, origin, player, direction))
        .collect()
}

/// Full legality check: `origin` is on the board, empty, and captures in at
/// least one direction.
pub fn is_legal_move(board: &Board, origin: Position, player: Player) -> bool {
    origin.is_valid()
        && board.cell(&origin).is_empty()
        && Direction::ALL
            .into_iter()
            .any(|direction| is_legal_in_direction(board, origin, player, direction))
}

/// Every square `player` may move to, in column-major order (a1..a8, b1..b8,
/// ...). The order is part of the text protocol.
pub fn legal_targets(board: &Board, player: Player) -> Vec<Position> {
    Position::column_major()
        .filter(|&pos| is_legal_move(board, pos, player))
        .collect()
}

pub fn has_legal_move(board: &Board, player: Player) -> bool {
    Position::column_major().any(|pos| is_legal_move(board, pos, player))
}
