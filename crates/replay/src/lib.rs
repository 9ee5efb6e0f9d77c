//! Game replay for chess_core
//!
//! Loads a recorded game (a TOML file listing coordinate moves such as
//! `e2e4`), resolves each ply through [`chess_core::create_move`] starting
//! from the initial board, and reports the labels, final status and
//! captured pieces.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p replay -- games/fools_mate.toml --board
//! cargo run -p replay -- games/fools_mate.toml --json summary.json
//! ```

mod game;
pub mod logger;
mod runner;
mod summary;

pub use game::*;
pub use runner::*;
pub use summary::*;
