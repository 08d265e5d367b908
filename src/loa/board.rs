use std::cell::OnceCell;
use std::hash::{Hash, Hasher};
use std::ops::{ControlFlow, Deref, DerefMut};

use internal_iterator::InternalIterator;
use rand::Rng;
use thiserror::Error;

use crate::board::{Outcome, Piece, Player};
use crate::loa::regions::region_sizes;
use crate::loa::{Direction, Move, Square};
use crate::util::bitboard::BitBoard8;

/// The default number of moves per side after which the game is a draw.
pub const DEFAULT_MOVE_LIMIT: u32 = 60;

const B: Piece = Piece::Black;
const W: Piece = Piece::White;
const E: Piece = Piece::Empty;

/// The standard start position, bottom row first so `INITIAL_PIECES[row][col]`.
pub const INITIAL_PIECES: [[Piece; 8]; 8] = [
    [E, B, B, B, B, B, B, E],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [E, B, B, B, B, B, B, E],
];

/// The state of a game of Lines of Action.
///
/// Derived state (the outcome and the region sizes) is computed lazily and cached until the next mutation.
#[derive(Clone)]
pub struct LoaBoard {
    pub(super) cells: [Piece; Square::COUNT as usize],
    pub(super) next_player: Player,
    moves: Vec<Move>,
    prev_pieces: Vec<Piece>,
    move_limit: u32,
    outcome: OnceCell<Option<Outcome>>,
    regions: OnceCell<RegionSizes>,
}

#[derive(Debug, Clone)]
struct RegionSizes {
    white: Vec<u8>,
    black: Vec<u8>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum PlayError {
    #[error("the game is already over")]
    GameOver,
    #[error("move {0} is not legal")]
    IllegalMove(Move),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
#[error("move limit of {limit} per side is too small, {moves_made} moves have already been made")]
pub struct InvalidMoveLimit {
    pub limit: u32,
    pub moves_made: u32,
}

impl Default for LoaBoard {
    fn default() -> Self {
        LoaBoard::new(&INITIAL_PIECES, Player::Black)
    }
}

impl LoaBoard {
    /// A board with `contents[row][col]` on each square (bottom row first) and `next_player` to move.
    pub fn new(contents: &[[Piece; 8]; 8], next_player: Player) -> Self {
        let mut cells = [Piece::Empty; Square::COUNT as usize];
        for square in Square::all() {
            cells[square.index() as usize] = contents[square.row() as usize][square.col() as usize];
        }

        LoaBoard {
            cells,
            next_player,
            moves: vec![],
            prev_pieces: vec![],
            move_limit: 2 * DEFAULT_MOVE_LIMIT,
            outcome: OnceCell::new(),
            regions: OnceCell::new(),
        }
    }

    /// A board without any pieces.
    pub fn empty(next_player: Player) -> Self {
        LoaBoard::new(&[[Piece::Empty; 8]; 8], next_player)
    }

    pub fn get(&self, square: Square) -> Piece {
        self.cells[square.index() as usize]
    }

    /// Set the content of `square` and, if given, the player to move next.
    /// Does not touch the move history.
    pub fn set(&mut self, square: Square, piece: Piece, next: Option<Player>) {
        self.cells[square.index() as usize] = piece;
        if let Some(next) = next {
            self.next_player = next;
        }
        self.invalidate();
    }

    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// The number of moves made and not retracted.
    pub fn moves_made(&self) -> u32 {
        self.moves.len() as u32
    }

    /// The moves made and not retracted, in order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The total number of moves (for both sides) after which an undecided game is a draw.
    pub fn move_limit(&self) -> u32 {
        self.move_limit
    }

    /// Set the move limit to `limit` moves per side.
    pub fn set_move_limit(&mut self, limit: u32) -> Result<(), InvalidMoveLimit> {
        let moves_made = self.moves_made();
        let total = limit.saturating_mul(2);
        if total <= moves_made {
            return Err(InvalidMoveLimit { limit, moves_made });
        }

        self.move_limit = total;
        self.outcome.take();
        Ok(())
    }

    /// The squares occupied by `player`.
    pub fn pieces(&self, player: Player) -> BitBoard8 {
        let piece = Piece::from(player);
        Square::all().filter(|&sq| self.get(sq) == piece).collect()
    }

    /// The squares occupied by any piece.
    pub fn occupied(&self) -> BitBoard8 {
        Square::all().filter(|&sq| !self.get(sq).is_empty()).collect()
    }

    /// The number of pieces on the full line through `square` along `dir`, counting `square` itself.
    pub fn line_count(&self, square: Square, dir: Direction) -> u8 {
        let count_ray = |dir| square.ray(dir).filter(|&sq| !self.get(sq).is_empty()).count() as u8;
        count_ray(dir) + count_ray(dir.opposite()) + 1
    }

    /// Whether the path from `from` to `to` is blocked for the player to move: an opposing piece strictly in between,
    /// or a friendly piece on `to`. Squares that are not aligned are always blocked.
    pub fn blocked(&self, from: Square, to: Square) -> bool {
        let dir = match from.direction(to) {
            Some(dir) => dir,
            None => return true,
        };

        let own = Piece::from(self.next_player);
        let distance = from.distance(to);

        let jumps_opponent = from
            .ray(dir)
            .take(distance as usize - 1)
            .any(|sq| {
                let piece = self.get(sq);
                !piece.is_empty() && piece != own
            });

        jumps_opponent || self.get(to) == own
    }

    /// Whether moving the piece on `from` to `to` is legal for the player to move.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        if self.get(from) != Piece::from(self.next_player) {
            return false;
        }
        let dir = match from.direction(to) {
            Some(dir) => dir,
            None => return false,
        };

        !self.blocked(from, to) && self.line_count(from, dir) == from.distance(to)
    }

    /// Same as [LoaBoard::is_legal], the capture flag of `mv` is ignored.
    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.is_legal(mv.from, mv.to)
    }

    /// All legal moves, ordered by source square in column-major order and then by destination in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        let own = Piece::from(self.next_player);

        let mut result = vec![];
        for from in Square::all_column_major() {
            if self.get(from) != own {
                continue;
            }
            for to in Square::all() {
                if self.is_legal(from, to) {
                    result.push(self.move_to(from, to));
                }
            }
        }
        result
    }

    /// All legal moves, ordered by source square in column-major order and then by [Direction].
    /// Yields the same set of moves as [LoaBoard::legal_moves].
    pub fn available_moves(&self) -> AvailableMovesIterator<'_> {
        AvailableMovesIterator(self)
    }

    /// Pick a legal move uniformly at random, `None` if there are none.
    pub fn random_legal_move(&self, rng: &mut impl Rng) -> Option<Move> {
        let count = self.available_moves().count();
        if count == 0 {
            return None;
        }
        let index = rng.gen_range(0..count);
        self.available_moves().nth(index)
    }

    fn move_to(&self, from: Square, to: Square) -> Move {
        let capture = self.get(to) == Piece::from(self.next_player.other());
        Move::with_capture(from, to, capture)
    }

    /// Play `mv`. Panics if it is not legal.
    pub fn make_move(&mut self, mv: Move) {
        assert!(self.is_legal_move(mv), "{} is not legal on {:?}", mv, self);

        let to = mv.to.index() as usize;
        self.moves.push(mv);
        self.prev_pieces.push(self.cells[to]);

        self.cells[mv.from.index() as usize] = Piece::Empty;
        self.cells[to] = Piece::from(self.next_player);
        self.next_player = self.next_player.other();
        self.invalidate();
    }

    /// Play `mv` if the game is not over yet and the move is legal.
    pub fn try_make_move(&mut self, mv: Move) -> Result<(), PlayError> {
        if self.game_over() {
            return Err(PlayError::GameOver);
        }
        if !self.is_legal_move(mv) {
            return Err(PlayError::IllegalMove(mv));
        }
        self.make_move(mv);
        Ok(())
    }

    /// Undo the last move, does nothing if no moves have been made.
    pub fn retract(&mut self) {
        let (mv, prev) = match (self.moves.pop(), self.prev_pieces.pop()) {
            (Some(mv), Some(prev)) => (mv, prev),
            _ => return,
        };

        let mover = self.next_player.other();
        self.cells[mv.to.index() as usize] = prev;
        self.cells[mv.from.index() as usize] = Piece::from(mover);
        self.next_player = mover;
        self.invalidate();
    }

    /// Play `mv` and return a guard that derefs to this board and retracts the move when dropped.
    /// Panics if the move is not legal.
    pub fn play_scoped(&mut self, mv: Move) -> MoveGuard<'_> {
        self.make_move(mv);
        MoveGuard { board: self }
    }

    /// The outcome, `None` if the game is still in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        *self.outcome.get_or_init(|| self.compute_outcome())
    }

    pub fn game_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// The player that won, `None` for both a draw and a game in progress.
    /// Use [LoaBoard::outcome] to tell a draw from an unfinished game.
    pub fn winner(&self) -> Option<Player> {
        self.outcome().and_then(Outcome::winner)
    }

    fn compute_outcome(&self) -> Option<Outcome> {
        let white = self.pieces_contiguous(Player::White);
        let black = self.pieces_contiguous(Player::Black);

        match (white, black) {
            // the player that just moved connected both sides
            (true, true) => Some(Outcome::WonBy(self.next_player.other())),
            (true, false) => Some(Outcome::WonBy(Player::White)),
            (false, true) => Some(Outcome::WonBy(Player::Black)),
            (false, false) if self.moves_made() >= self.move_limit => Some(Outcome::Draw),
            (false, false) => None,
        }
    }

    /// Whether all pieces of `player` form a single region.
    pub fn pieces_contiguous(&self, player: Player) -> bool {
        self.region_sizes(player).len() == 1
    }

    /// The sizes of the 8-connected regions of `player`, largest first.
    pub fn region_sizes(&self, player: Player) -> &[u8] {
        let regions = self.regions.get_or_init(|| RegionSizes {
            white: region_sizes(self.pieces(Player::White)),
            black: region_sizes(self.pieces(Player::Black)),
        });

        match player {
            Player::White => &regions.white,
            Player::Black => &regions.black,
        }
    }

    fn invalidate(&mut self) {
        self.outcome.take();
        self.regions.take();
    }

    pub fn assert_valid(&self) {
        assert_eq!(self.moves.len(), self.prev_pieces.len());

        if let Some(regions) = self.regions.get() {
            assert_eq!(regions.white, region_sizes(self.pieces(Player::White)));
            assert_eq!(regions.black, region_sizes(self.pieces(Player::Black)));
        }
        if let Some(&outcome) = self.outcome.get() {
            assert_eq!(outcome, self.compute_outcome());
        }
    }
}

impl PartialEq for LoaBoard {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
            && self.next_player == other.next_player
            && self.moves == other.moves
            && self.move_limit == other.move_limit
    }
}

impl Eq for LoaBoard {}

impl Hash for LoaBoard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
        self.next_player.hash(state);
        self.moves.hash(state);
        self.move_limit.hash(state);
    }
}

/// A move played on a board, retracted again when this guard is dropped.
#[derive(Debug)]
pub struct MoveGuard<'a> {
    board: &'a mut LoaBoard,
}

impl Deref for MoveGuard<'_> {
    type Target = LoaBoard;

    fn deref(&self) -> &LoaBoard {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut LoaBoard {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.retract();
    }
}

/// Iterator over [LoaBoard::available_moves].
#[derive(Debug)]
pub struct AvailableMovesIterator<'a>(pub &'a LoaBoard);

impl InternalIterator for AvailableMovesIterator<'_> {
    type Item = Move;

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        let board = self.0;
        let own = Piece::from(board.next_player);

        for from in Square::all_column_major() {
            if board.get(from) != own {
                continue;
            }

            // the distance is fixed by the line, so there is at most one destination per direction
            for dir in Direction::ALL {
                let distance = board.line_count(from, dir);
                let to = match from.move_dest(dir, distance) {
                    Some(to) => to,
                    None => continue,
                };

                if !board.blocked(from, to) {
                    f(board.move_to(from, to))?;
                }
            }
        }

        ControlFlow::Continue(())
    }
}
