use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::loa::Square;

/// A move of the piece on `from` to `to`.
///
/// `capture` is advisory and only set by move generation when `to` held an opposing piece,
/// it is ignored by equality, ordering, hashing and by the board when playing the move.
#[derive(Copy, Clone)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub capture: bool,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            capture: false,
        }
    }

    pub fn with_capture(from: Square, to: Square, capture: bool) -> Move {
        Move { from, to, capture }
    }

    fn key(self) -> (Square, Square) {
        (self.from, self.to)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Move {}

impl PartialOrd for Move {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Move {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state)
    }
}
