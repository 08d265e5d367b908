use std::cmp::max;

use crate::util::bitboard::BitBoard8;

/// One of the 64 squares of the board.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square {
    index: u8,
}

/// The 8 compass directions a piece can move in.
/// North is towards higher rows, east towards higher columns.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

pub type SquareAllIter = std::iter::Map<std::ops::Range<u8>, fn(u8) -> Square>;

impl Square {
    pub const SIZE: u8 = 8;
    pub const COUNT: u8 = Self::SIZE * Self::SIZE;

    pub fn from_index(index: u8) -> Self {
        assert!(index < Self::COUNT, "square index {} out of range", index);
        Square { index }
    }

    pub fn from_col_row(col: u8, row: u8) -> Self {
        assert!(col < Self::SIZE, "column {} out of range", col);
        assert!(row < Self::SIZE, "row {} out of range", row);
        Square {
            index: col + Self::SIZE * row,
        }
    }

    /// All squares in index order, row by row starting from the bottom row.
    pub fn all() -> SquareAllIter {
        (0..Self::COUNT).map(|index| Square::from_index(index))
    }

    /// All squares in column-major order, the order used for move generation.
    pub fn all_column_major() -> impl Iterator<Item = Square> {
        (0..Self::SIZE).flat_map(|col| (0..Self::SIZE).map(move |row| Square::from_col_row(col, row)))
    }

    pub const fn index(self) -> u8 {
        self.index
    }

    pub fn col(self) -> u8 {
        self.index % Self::SIZE
    }

    pub fn row(self) -> u8 {
        self.index / Self::SIZE
    }

    /// The Chebyshev distance, which is the number of steps between aligned squares.
    pub fn distance(self, other: Square) -> u8 {
        let dc = self.col().abs_diff(other.col());
        let dr = self.row().abs_diff(other.row());
        max(dc, dr)
    }

    /// The direction to step in from `self` to eventually reach `other`,
    /// `None` if they are equal or not on a common row, column or diagonal.
    pub fn direction(self, other: Square) -> Option<Direction> {
        let dc = other.col() as i8 - self.col() as i8;
        let dr = other.row() as i8 - self.row() as i8;

        if (dc, dr) == (0, 0) || (dc != 0 && dr != 0 && dc.abs() != dr.abs()) {
            return None;
        }

        Direction::from_delta(dc.signum(), dr.signum())
    }

    pub fn is_valid_move(self, other: Square) -> bool {
        self.direction(other).is_some()
    }

    /// The square `n` steps away in direction `dir`, `None` if that is off the board.
    pub fn move_dest(self, dir: Direction, n: u8) -> Option<Square> {
        let (dc, dr) = dir.delta();
        let col = self.col() as i16 + dc as i16 * n as i16;
        let row = self.row() as i16 + dr as i16 * n as i16;

        let range = 0..Self::SIZE as i16;
        if range.contains(&col) && range.contains(&row) {
            Some(Square::from_col_row(col as u8, row as u8))
        } else {
            None
        }
    }

    /// The squares stepping away from `self` in direction `dir` until the edge, excluding `self`.
    pub fn ray(self, dir: Direction) -> impl Iterator<Item = Square> {
        (1..Self::SIZE).map_while(move |n| self.move_dest(dir, n))
    }

    /// The on-board king-move neighbours.
    pub fn adjacent(self) -> impl Iterator<Item = Square> {
        BitBoard8::square(self).adjacent().into_iter()
    }
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Direction {
        Direction::ALL[index as usize]
    }

    pub fn opposite(self) -> Direction {
        Direction::from_index((self.index() + 4) % 8)
    }

    /// The `(column, row)` step.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::N => (0, 1),
            Direction::NE => (1, 1),
            Direction::E => (1, 0),
            Direction::SE => (1, -1),
            Direction::S => (0, -1),
            Direction::SW => (-1, -1),
            Direction::W => (-1, 0),
            Direction::NW => (-1, 1),
        }
    }

    fn from_delta(dc: i8, dr: i8) -> Option<Direction> {
        Direction::ALL.iter().copied().find(|dir| dir.delta() == (dc, dr))
    }
}
