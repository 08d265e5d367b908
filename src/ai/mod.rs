use std::fmt::Debug;

use thiserror::Error;

use crate::board::Player;
use crate::loa::{LoaBoard, Move};

pub mod minimax;
pub mod simple;

pub trait Bot: Debug {
    /// Pick a move to play for the player to move on `board`.
    ///
    /// `self` is mutable to allow for random state, this method is not supposed to
    /// modify `self` in any other significant way.
    fn select_move(&mut self, board: &LoaBoard) -> Result<Move, SelectError>;
}

/// The reasons a bot can refuse to pick a move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum SelectError {
    #[error("the game is already over")]
    GameOver,
    #[error("{actual} is to move but this player plays {expected}")]
    WrongSide { expected: Player, actual: Player },
    #[error("the player to move has no legal moves")]
    NoLegalMoves,
}
