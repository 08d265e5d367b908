use std::fmt::{Debug, Display, Formatter, Write};
use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

use crate::board::{Piece, Player};
use crate::loa::{LoaBoard, Move, Square};

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("invalid square '{0}'")]
pub struct InvalidSquare(pub String);

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("invalid move '{0}'")]
pub struct InvalidMove(pub String);

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("invalid layout '{layout}': {reason}")]
pub struct InvalidLayout {
    pub layout: String,
    pub reason: &'static str,
}

mod parse {
    use nom::character::complete::{char, one_of};
    use nom::combinator::map;
    use nom::sequence::{pair, separated_pair};
    use nom::IResult;

    use crate::loa::{Move, Square};

    pub fn square(input: &str) -> IResult<&str, Square> {
        map(pair(one_of("abcdefgh"), one_of("12345678")), |(col, row)| {
            Square::from_col_row(col as u8 - b'a', row as u8 - b'1')
        })(input)
    }

    pub fn mv(input: &str) -> IResult<&str, Move> {
        map(separated_pair(square, char('-'), square), |(from, to)| Move::new(from, to))(input)
    }
}

impl FromStr for Square {
    type Err = InvalidSquare;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        nom::combinator::all_consuming(parse::square)(s)
            .map(|(_, square)| square)
            .map_err(|_| InvalidSquare(s.to_owned()))
    }
}

impl FromStr for Move {
    type Err = InvalidMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        nom::combinator::all_consuming(parse::mv)(s)
            .map(|(_, mv)| mv)
            .map_err(|_| InvalidMove(s.to_owned()))
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.col()) as char, self.row() + 1)
    }
}

impl Debug for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.capture {
            write!(f, "{}x", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

fn player_symbol(player: Player) -> char {
    Piece::from(player).abbrev()
}

impl LoaBoard {
    /// Parse a compact layout: the rows from top to bottom separated by `/`, each cell one of `b`, `w` or `-`
    /// or a digit for a run of empty cells, followed by a space and the player to move.
    ///
    /// The standard start position is `1bbbbbb1/w6w/w6w/w6w/w6w/w6w/w6w/1bbbbbb1 b`.
    pub fn from_layout(layout: &str) -> Result<LoaBoard, InvalidLayout> {
        let err = |reason| InvalidLayout {
            layout: layout.into(),
            reason,
        };

        let (cells_str, next_str) = match &*layout.split(' ').collect_vec() {
            &[a, b] => (a, b),
            _ => return Err(err("Expected cells and next player separated by a single space")),
        };

        let next = match next_str.chars().exactly_one().ok().and_then(Piece::from_abbrev) {
            Some(piece) => piece.player().ok_or_else(|| err("Next player cannot be empty"))?,
            None => return Err(err("Invalid next player")),
        };

        let rows = cells_str.split('/').collect_vec();
        if rows.len() != Square::SIZE as usize {
            return Err(err("Expected 8 rows"));
        }

        let mut board = LoaBoard::empty(next);
        for (i, line) in rows.iter().enumerate() {
            let row = Square::SIZE - 1 - i as u8;
            let mut col = 0;

            for c in line.chars() {
                if let Some(d) = c.to_digit(10) {
                    if col as u32 + d > Square::SIZE as u32 {
                        return Err(err("Too many cells in row"));
                    }
                    col += d as u8;
                    continue;
                }

                let piece = Piece::from_abbrev(c).ok_or_else(|| err("Invalid character in row"))?;
                if col >= Square::SIZE {
                    return Err(err("Too many cells in row"));
                }
                board.cells[Square::from_col_row(col, row).index() as usize] = piece;
                col += 1;
            }

            if col != Square::SIZE {
                return Err(err("Row does not have 8 cells"));
            }
        }

        Ok(board)
    }

    /// The inverse of [LoaBoard::from_layout], runs of empty cells are written as digits.
    pub fn to_layout(&self) -> String {
        let mut s = String::new();

        for row in (0..Square::SIZE).rev() {
            if row != Square::SIZE - 1 {
                s.push('/');
            }

            let mut empty_count = 0;
            for col in 0..Square::SIZE {
                match self.get(Square::from_col_row(col, row)) {
                    Piece::Empty => empty_count += 1,
                    piece => {
                        if empty_count != 0 {
                            write!(&mut s, "{}", empty_count).unwrap();
                            empty_count = 0;
                        }
                        s.push(piece.abbrev());
                    }
                }
            }

            if empty_count != 0 {
                write!(&mut s, "{}", empty_count).unwrap();
            }
        }

        write!(&mut s, " {}", player_symbol(self.next_player)).unwrap();
        s
    }
}

impl FromStr for LoaBoard {
    type Err = InvalidLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LoaBoard::from_layout(s)
    }
}

impl Debug for LoaBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "LoaBoard(\"{}\")", self.to_layout())
    }
}

impl Display for LoaBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "===")?;
        for row in (0..Square::SIZE).rev() {
            let cells = (0..Square::SIZE).map(|col| self.get(Square::from_col_row(col, row)).abbrev());
            writeln!(f, "    {}", cells.format(" "))?;
        }
        writeln!(f, "Next move: {}", self.next_player)?;
        write!(f, "===")
    }
}
