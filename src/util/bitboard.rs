use std::fmt::{Display, Formatter};

use crate::loa::Square;
use crate::util::bits::BitIter;

/// A set of squares on the 8x8 board, bit `i` corresponds to `Square::from_index(i)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct BitBoard8(u64);

impl BitBoard8 {
    pub const EMPTY: BitBoard8 = BitBoard8(0);
    pub const FULL: BitBoard8 = BitBoard8(!0);

    #[must_use]
    pub const fn new(bits: u64) -> BitBoard8 {
        BitBoard8(bits)
    }

    #[must_use]
    pub const fn square(square: Square) -> BitBoard8 {
        BitBoard8(1 << square.index())
    }

    #[must_use]
    pub const fn inner(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn has(self, square: Square) -> bool {
        (self.0 >> square.index()) & 1 != 0
    }

    #[must_use]
    pub const fn none(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn any(self) -> bool {
        self.0 != 0
    }

    #[must_use]
    pub const fn count(self) -> u8 {
        self.0.count_ones() as u8
    }

    #[must_use]
    pub const fn set(self, square: Square) -> Self {
        BitBoard8(self.0 | (1 << square.index()))
    }

    #[must_use]
    pub const fn clear(self, square: Square) -> Self {
        BitBoard8(self.0 & !(1 << square.index()))
    }

    pub const fn left(self) -> Self {
        BitBoard8((self.0 >> 1) & 0x7f7f7f7f7f7f7f7f)
    }

    pub const fn right(self) -> Self {
        BitBoard8((self.0 << 1) & 0xfefefefefefefefe)
    }

    pub const fn down(self) -> Self {
        BitBoard8((self.0 >> 8) & 0x00ffffffffffffff)
    }

    pub const fn up(self) -> Self {
        BitBoard8((self.0 << 8) & 0xffffffffffffff00)
    }

    pub const fn orthogonal(self) -> Self {
        BitBoard8(self.left().0 | self.right().0 | self.up().0 | self.down().0)
    }

    pub const fn diagonal(self) -> Self {
        BitBoard8(self.left().up().0 | self.right().up().0 | self.left().down().0 | self.right().down().0)
    }

    /// All squares that are a king move away from any square in this set.
    pub const fn adjacent(self) -> Self {
        BitBoard8(self.orthogonal().0 | self.diagonal().0)
    }
}

impl IntoIterator for BitBoard8 {
    type Item = Square;
    type IntoIter = std::iter::Map<BitIter<u64>, fn(u8) -> Square>;

    fn into_iter(self) -> Self::IntoIter {
        BitIter::new(self.0).map(|i| Square::from_index(i))
    }
}

impl FromIterator<Square> for BitBoard8 {
    fn from_iter<T: IntoIterator<Item = Square>>(iter: T) -> Self {
        iter.into_iter().fold(BitBoard8::EMPTY, BitBoard8::set)
    }
}

impl Display for BitBoard8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in (0..8).rev() {
            for col in 0..8 {
                let square = Square::from_col_row(col, row);
                write!(f, "{}", if self.has(square) { '1' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

mod operations {
    use super::*;

    impl std::ops::BitOr for BitBoard8 {
        type Output = BitBoard8;

        fn bitor(self, rhs: Self) -> Self::Output {
            BitBoard8(self.0 | rhs.0)
        }
    }

    impl std::ops::BitAnd for BitBoard8 {
        type Output = BitBoard8;

        fn bitand(self, rhs: Self) -> Self::Output {
            BitBoard8(self.0 & rhs.0)
        }
    }

    impl std::ops::Not for BitBoard8 {
        type Output = BitBoard8;

        fn not(self) -> Self::Output {
            BitBoard8(!self.0)
        }
    }

    impl std::ops::BitOrAssign for BitBoard8 {
        fn bitor_assign(&mut self, rhs: Self) {
            self.0 |= rhs.0
        }
    }

    impl std::ops::BitAndAssign for BitBoard8 {
        fn bitand_assign(&mut self, rhs: Self) {
            self.0 &= rhs.0
        }
    }
}
