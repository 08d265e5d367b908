use std::fmt::{Display, Formatter};

/// One of the two sides.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Player {
    White,
    Black,
}

/// The absolute outcome for a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    WonBy(Player),
    Draw,
}

/// The content of a single square.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Piece {
    White,
    Black,
    Empty,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::White, Player::Black];

    pub fn other(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    /// `1` if `self == pov`, `-1` otherwise.
    pub fn sign<V: num_traits::One + std::ops::Neg<Output = V>>(self, pov: Player) -> V {
        if self == pov {
            V::one()
        } else {
            -V::one()
        }
    }

    pub fn full_name(self) -> &'static str {
        Piece::from(self).full_name()
    }
}

impl Piece {
    /// The piece of the other side. Panics for [Piece::Empty].
    pub fn opposite(self) -> Piece {
        match self {
            Piece::White => Piece::Black,
            Piece::Black => Piece::White,
            Piece::Empty => panic!("Piece::Empty has no opposite"),
        }
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Piece::White => Some(Player::White),
            Piece::Black => Some(Player::Black),
            Piece::Empty => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    pub fn abbrev(self) -> char {
        match self {
            Piece::White => 'w',
            Piece::Black => 'b',
            Piece::Empty => '-',
        }
    }

    pub fn from_abbrev(c: char) -> Option<Piece> {
        match c {
            'w' => Some(Piece::White),
            'b' => Some(Piece::Black),
            '-' => Some(Piece::Empty),
            _ => None,
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            Piece::White => "white",
            Piece::Black => "black",
            Piece::Empty => "empty",
        }
    }
}

impl From<Player> for Piece {
    fn from(player: Player) -> Self {
        match player {
            Player::White => Piece::White,
            Player::Black => Piece::Black,
        }
    }
}

impl Outcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::WonBy(player) => Some(player),
            Outcome::Draw => None,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_name())
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::WonBy(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}
