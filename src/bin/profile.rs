//! Random self-play for profiling. Build with `--features hotpath` to get a
//! timing report for the instrumented functions.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reversi_engine::board::Board;
use reversi_engine::engine;
use reversi_engine::player::Player;
use reversi_engine::position::Position;

const GAMES: usize = 2_000;

#[hotpath::measure]
fn targets(board: &Board, player: Player) -> Vec<Position> {
    engine::legal_targets(board, player)
}

#[hotpath::measure]
fn play(board: &mut Board, target: Position, player: Player) -> usize {
    engine::apply_move(board, target, player)
}

/// Play until neither side can move and return the final board.
fn playout(rng: &mut StdRng) -> Board {
    let mut board = Board::initial();
    let mut player = Player::Black;
    let mut passes = 0;

    while passes < 2 {
        let moves = targets(&board, player);
        match moves.choose(rng) {
            Some(&target) => {
                play(&mut board, target, player);
                passes = 0;
            }
            None => passes += 1,
        }
        player = player.opposite();
    }

    board
}

#[hotpath::main]
fn main() {
    let mut rng = StdRng::seed_from_u64(123);
    let mut black_wins = 0;

    for _ in 0..GAMES {
        let board = playout(&mut rng);
        if board.count(Player::Black) > board.count(Player::White) {
            black_wins += 1;
        }
    }

    println!("{} playouts, black won {}", GAMES, black_wins);
}
