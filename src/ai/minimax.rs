use std::cmp::{max, min};

use internal_iterator::InternalIterator;
use tracing::{debug, trace};

use crate::ai::{Bot, SelectError};
use crate::board::{Outcome, Player};
use crate::loa::{LoaBoard, Move};

/// The base magnitude of a decided game, scaled by the remaining depth.
pub const MAX_SCORE: i32 = 10_000;

/// A bound larger than any score [evaluate] can return.
pub const INFINITY: i32 = i32::MAX;

/// The number of plies searched by [MachinePlayer::default_for].
pub const DEFAULT_DEPTH: u32 = 2;

/// The search sense of `player`: `1` for White, who maximizes, `-1` for Black, who minimizes.
pub fn sense(player: Player) -> i32 {
    player.sign(Player::White)
}

/// Static evaluation of `board` from White's point of view, where `depth` is the remaining search depth.
///
/// A decided game is worth `MAX_SCORE * (depth + 1)` for the winner, so faster wins score higher.
/// A draw is worth one less than that for the player that made the last move.
/// Otherwise each region costs its owner 2 points.
pub fn evaluate(board: &LoaBoard, depth: u32) -> i32 {
    let decided = MAX_SCORE * (depth as i32 + 1);

    match board.outcome() {
        Some(Outcome::WonBy(winner)) => sense(winner) * decided,
        Some(Outcome::Draw) => sense(board.next_player().other()) * (decided - 1),
        None => {
            let white = board.region_sizes(Player::White).len() as i32;
            let black = board.region_sizes(Player::Black).len() as i32;
            2 * black - 2 * white
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SearchResult {
    /// The value of the board, from White's point of view.
    pub value: i32,

    /// The best move to play, `None` if the player to move has no legal moves.
    pub best_move: Option<Move>,

    /// The number of positions visited, including the root.
    pub nodes: u64,
}

/// The value of `board` after searching `depth` plies with alpha-beta pruning,
/// `sense` must be the [sense] of the player to move.
///
/// `board` is used as scratch space, it is back in its original state when this function returns.
pub fn minimax(board: &mut LoaBoard, depth: u32, sense: i32, alpha: i32, beta: i32) -> i32 {
    let mut nodes = 0;
    minimax_recurse(board, depth, sense, alpha, beta, &mut nodes)
}

/// Search all moves at the root and return the one with the strictly best value for `sense`.
/// The first move wins ties, so the result is deterministic.
///
/// Panics if `depth == 0` or if the game on `board` is already over.
pub fn find_best_move(board: &mut LoaBoard, depth: u32, sense: i32, alpha: i32, beta: i32) -> SearchResult {
    assert!(depth > 0, "requires depth > 0 to find the best move");
    assert!(!board.game_over(), "cannot search a finished game {:?}", board);
    debug_assert!(sense == 1 || sense == -1);

    let mut alpha = alpha;
    let mut beta = beta;
    let mut nodes = 1;
    let mut best: Option<(Move, i32)> = None;

    let moves: Vec<Move> = board.available_moves().collect();
    for mv in moves {
        let value = minimax_recurse(&mut board.play_scoped(mv), depth - 1, -sense, alpha, beta, &mut nodes);
        trace!(%mv, value, "root move");

        if best.map_or(true, |(_, best_value)| sense * value > sense * best_value) {
            best = Some((mv, value));
        }

        if sense > 0 {
            alpha = max(alpha, value);
        } else {
            beta = min(beta, value);
        }
    }

    SearchResult {
        value: best.map_or_else(|| evaluate(board, depth), |(_, value)| value),
        best_move: best.map(|(mv, _)| mv),
        nodes,
    }
}

fn minimax_recurse(board: &mut LoaBoard, depth: u32, sense: i32, alpha: i32, beta: i32, nodes: &mut u64) -> i32 {
    *nodes += 1;

    if depth == 0 || board.game_over() {
        return evaluate(board, depth);
    }

    let moves: Vec<Move> = board.available_moves().collect();
    if moves.is_empty() {
        return evaluate(board, depth);
    }

    let mut alpha = alpha;
    let mut beta = beta;
    let mut best = if sense > 0 { -INFINITY } else { INFINITY };

    for mv in moves {
        let value = minimax_recurse(&mut board.play_scoped(mv), depth - 1, -sense, alpha, beta, nodes);

        if sense > 0 {
            best = max(best, value);
            alpha = max(alpha, value);
        } else {
            best = min(best, value);
            beta = min(beta, value);
        }

        if beta <= alpha {
            break;
        }
    }

    best
}

/// The automated player: a fixed-depth alpha-beta search from scratch on every move.
#[derive(Debug, Clone)]
pub struct MachinePlayer {
    side: Player,
    depth: u32,
}

impl MachinePlayer {
    pub fn new(side: Player, depth: u32) -> Self {
        assert!(depth > 0, "requires depth>0 to find the best move");
        MachinePlayer { side, depth }
    }

    pub fn default_for(side: Player) -> Self {
        MachinePlayer::new(side, DEFAULT_DEPTH)
    }

    pub fn side(&self) -> Player {
        self.side
    }

    /// The search depth for the next move.
    pub fn choose_depth(&self) -> u32 {
        self.depth
    }

    /// Search a private copy of `board` and return the best move for this player.
    pub fn choose_move(&self, board: &LoaBoard) -> Result<Move, SelectError> {
        if board.game_over() {
            return Err(SelectError::GameOver);
        }
        if board.next_player() != self.side {
            return Err(SelectError::WrongSide {
                expected: self.side,
                actual: board.next_player(),
            });
        }

        let depth = self.choose_depth();
        let mut work = board.clone();
        let result = find_best_move(&mut work, depth, sense(self.side), -INFINITY, INFINITY);
        debug_assert_eq!(&work, board, "search did not restore the board");

        let mv = result.best_move.ok_or(SelectError::NoLegalMoves)?;
        debug!(
            side = %self.side,
            depth,
            %mv,
            value = result.value,
            nodes = result.nodes,
            "selected move"
        );
        Ok(mv)
    }
}

impl Bot for MachinePlayer {
    fn select_move(&mut self, board: &LoaBoard) -> Result<Move, SelectError> {
        self.choose_move(board)
    }
}
