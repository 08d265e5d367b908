use crate::loa::Square;
use crate::util::bitboard::BitBoard8;

/// Incremental connected-component scan over a set of pieces using king-move adjacency.
///
/// Each call to [RegionScan::next_region] flood-fills the lowest-index piece that has not been visited yet,
/// using an explicit stack instead of recursion.
#[derive(Debug, Clone)]
pub struct RegionScan {
    pieces: BitBoard8,
    visited: BitBoard8,
    stack: Vec<Square>,
}

impl RegionScan {
    pub fn new(pieces: BitBoard8) -> Self {
        RegionScan {
            pieces,
            visited: BitBoard8::EMPTY,
            stack: Vec::with_capacity(Square::COUNT as usize),
        }
    }

    /// The pieces that have been assigned to a region so far.
    pub fn visited(&self) -> BitBoard8 {
        self.visited
    }

    /// The pieces that still have to be assigned to a region.
    pub fn remaining(&self) -> BitBoard8 {
        self.pieces & !self.visited
    }

    /// Flood-fill the next region and return its size, `None` once every piece has been visited.
    pub fn next_region(&mut self) -> Option<u8> {
        let start = self.remaining().into_iter().next()?;

        self.visited = self.visited.set(start);
        self.stack.push(start);

        let mut size = 0;
        while let Some(curr) = self.stack.pop() {
            size += 1;

            for next in curr.adjacent() {
                if self.pieces.has(next) && !self.visited.has(next) {
                    self.visited = self.visited.set(next);
                    self.stack.push(next);
                }
            }
        }

        Some(size)
    }
}

impl Iterator for RegionScan {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.next_region()
    }
}

/// The sizes of all maximal 8-connected regions of `pieces`, largest first.
pub fn region_sizes(pieces: BitBoard8) -> Vec<u8> {
    let mut sizes: Vec<u8> = RegionScan::new(pieces).collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes
}
