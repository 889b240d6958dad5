//! Chess rules module
//!
//! Move legality, terminal detection and position bookkeeping are delegated to
//! `shakmaty`. [`BoardState`] is the only type in the crate that talks to it
//! directly; everything else asks the board.

pub mod board_state;

pub use board_state::{square_at, square_coords, BoardState, GameOutcome};
