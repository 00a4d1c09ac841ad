//! `reversan-board` is the state-and-evaluation core of a Reversi engine.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`Board`] holds both colors' discs as [`Bitboard`]s and implements move
//!    generation, move application and static evaluation on the hot path.
//!    These operations are unchecked (apart from debug assertions) and are
//!    meant to be driven by a search that forks one copy per branch.
//!  - [`Game`] is a safe interface on top of [`Board`] which tracks the side
//!    to move and passes, and rejects illegal moves.
//!
//! Move generation and capture computation share a single directional
//! flood-fill, see [`flood`]. Its lanes run on a 4-wide unrolled scalar
//! backend by default, or on `packed_simd` vectors with the `simd` feature.

pub mod bitboard;
pub mod flood;
pub mod test_utils;

mod board;
mod color;
mod game;
mod heuristic;
mod square;
mod utils;

pub use bitboard::Bitboard;
pub use board::*;
pub use color::*;
pub use game::*;
pub use heuristic::*;
pub use square::*;

/// The number of squares on one edge of the board.
pub const EDGE_LENGTH: usize = 8;

/// The number of squares on the board.
pub const NUM_SQUARES: usize = 64;
