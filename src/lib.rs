#![warn(missing_debug_implementations)]
#![allow(clippy::new_without_default)]

//! An engine for [Lines of Action](https://en.wikipedia.org/wiki/Lines_of_Action),
//! the game where both sides try to connect all of their pieces into a single group.
//!
//! # Features
//!
//! * [LoaBoard](crate::loa::LoaBoard), the game state with legal move generation,
//!     make/retract and lazily cached win detection based on connected regions.
//! * [MachinePlayer](crate::ai::minimax::MachinePlayer),
//!     which picks the best move as evaluated by a fixed-depth alpha-beta minimax search.
//! * [RandomBot](crate::ai::simple::RandomBot),
//!     which simply picks a random move.
//! * Random board generation functions, see [board_gen](crate::util::board_gen).
//! * Simple game statistics (perft, average game length) which can be used to test the board implementation.
//!
//! # Examples
//!
//! ## List the legal moves in the start position and play one.
//!
//! ```
//! # use lines_of_action::loa::LoaBoard;
//! let mut board = LoaBoard::default();
//! println!("{}", board);
//!
//! for mv in board.legal_moves() {
//!     println!("{}", mv);
//! }
//!
//! let mv = "b1-b3".parse().unwrap();
//! assert!(board.is_legal_move(mv));
//! board.make_move(mv);
//! println!("{}", board);
//! ```
//!
//! ## Let the machine player pick a move.
//!
//! ```
//! # use lines_of_action::ai::minimax::MachinePlayer;
//! # use lines_of_action::board::Player;
//! # use lines_of_action::loa::LoaBoard;
//! let board = LoaBoard::default();
//! let player = MachinePlayer::default_for(Player::Black);
//! println!("{:?}", player.choose_move(&board));
//! ```

pub mod board;

pub mod loa;

pub mod ai;

pub mod util;
