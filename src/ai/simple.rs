//! A bot that plays uniformly random legal moves.
use std::fmt::{Debug, Formatter};

use rand::Rng;

use crate::ai::{Bot, SelectError};
use crate::loa::{LoaBoard, Move};

/// Bot that chooses moves randomly uniformly among the legal moves.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> Debug for RandomBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomBot")
    }
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        RandomBot { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn select_move(&mut self, board: &LoaBoard) -> Result<Move, SelectError> {
        if board.game_over() {
            return Err(SelectError::GameOver);
        }
        board.random_legal_move(&mut self.rng).ok_or(SelectError::NoLegalMoves)
    }
}
