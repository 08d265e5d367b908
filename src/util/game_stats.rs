//! Utilities for collecting game statistics and testing board and bot implementations.
use internal_iterator::InternalIterator;

use crate::ai::{Bot, SelectError};
use crate::board::Player;
use crate::loa::{LoaBoard, Move};

/// The number of legal positions reachable after `depth` moves, including duplicates.
/// See <https://www.chessprogramming.org/Perft>.
pub fn perft(board: &LoaBoard, depth: u32) -> u64 {
    perft_recurse(&mut board.clone(), depth)
}

fn perft_recurse(board: &mut LoaBoard, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    if board.game_over() {
        return 0;
    }
    if depth == 1 {
        return board.available_moves().count() as u64;
    }

    let moves: Vec<Move> = board.available_moves().collect();
    moves
        .into_iter()
        .map(|mv| perft_recurse(&mut board.play_scoped(mv), depth - 1))
        .sum()
}

/// Structure returned by [`average_game_stats`].
#[derive(Debug)]
pub struct GameStats {
    pub game_length: f32,
    pub available_moves: f32,
}

/// Return `GameStats` estimated from `n` games starting from `start` played by `white` and `black`.
pub fn average_game_stats(
    start: &LoaBoard,
    white: &mut impl Bot,
    black: &mut impl Bot,
    n: u64,
) -> Result<GameStats, SelectError> {
    let mut total_moves = 0;
    let mut total_positions = 0;

    for _ in 0..n {
        let mut board = start.clone();
        while !board.game_over() {
            total_moves += board.available_moves().count();
            total_positions += 1;

            let mv = match board.next_player() {
                Player::White => white.select_move(&board)?,
                Player::Black => black.select_move(&board)?,
            };
            board.make_move(mv);
        }
    }

    // finished start positions and n == 0 visit no positions
    if total_positions == 0 {
        return Ok(GameStats {
            game_length: 0.0,
            available_moves: 0.0,
        });
    }

    Ok(GameStats {
        game_length: total_positions as f32 / n as f32,
        available_moves: total_moves as f32 / total_positions as f32,
    })
}
