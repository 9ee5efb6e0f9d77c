//! Chess rules on immutable boards.
//!
//! A [`Board`] is built once from a [`Builder`] and never changes. Each
//! side's moves are generated at build time; [`Player::make_move`] checks a
//! move against that set, executes it into a fresh board and rejects it if
//! the mover's king would be left attacked.

pub mod board;
pub mod movegen;
pub mod moves;
pub mod notation;
pub mod perft;
pub mod player;
pub mod types;

#[doc(hidden)]
pub mod test_support;

pub use board::{Board, BoardError, Builder, Position, Tile};
pub use moves::{CastleSide, Move, MoveError, create_move};
pub use notation::{algebraic_to_square, square_to_algebraic};
pub use perft::{perft, perft_divide};
pub use player::{MoveStatus, MoveTransition, Player};
pub use types::*;
