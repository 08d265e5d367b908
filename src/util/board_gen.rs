//! Utilities to generate a `LoaBoard` in a random state.
use rand::Rng;

use crate::board::Outcome;
use crate::loa::{LoaBoard, Move};

/// Play the given moves, starting from `start`.
pub fn board_with_moves(start: LoaBoard, moves: &[Move]) -> LoaBoard {
    let mut curr = start;
    for &mv in moves {
        assert!(!curr.game_over(), "Board already done, playing {} on {:?}", mv, curr);
        curr.make_move(mv);
    }
    curr
}

/// Generate a `LoaBoard` by playing `n` random moves on `start`.
/// Games that end before `n` moves are thrown away and restarted, the last move may still finish the game.
pub fn random_board_with_moves(start: &LoaBoard, n: u32, rng: &mut impl Rng) -> LoaBoard {
    'new_try: loop {
        let mut board = start.clone();
        for _ in 0..n {
            if board.game_over() {
                continue 'new_try;
            }
            match board.random_legal_move(rng) {
                Some(mv) => board.make_move(mv),
                None => continue 'new_try,
            }
        }
        return board;
    }
}

/// Generate a random `LoaBoard` with a specific `Outcome` by playing random games from `start`.
pub fn random_board_with_outcome(start: &LoaBoard, outcome: Outcome, rng: &mut impl Rng) -> LoaBoard {
    loop {
        let mut board = start.clone();
        loop {
            if let Some(actual) = board.outcome() {
                if actual == outcome {
                    return board;
                }
                break;
            }
            match board.random_legal_move(rng) {
                Some(mv) => board.make_move(mv),
                None => break,
            }
        }
    }
}
