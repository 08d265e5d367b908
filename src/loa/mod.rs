//! The Lines of Action game: geometry, moves, board state and region computation.
pub use board::*;
pub use io::*;
pub use mv::*;
pub use square::*;

mod board;
mod io;
mod mv;
pub mod regions;
mod square;
