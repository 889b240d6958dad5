//! Board geometry in world space
//!
//! The 2D camera sits at the origin, so the 640×640 board spans
//! `-320..320` on both axes with rank 1 along the bottom edge.

use crate::core::{BOARD_SIZE, SQUARE_SIZE};
use crate::game::rules::square_coords;
use bevy::prelude::*;
use shakmaty::Square;

/// Draw order of the board layers
pub mod layer {
    pub const BORDER: f32 = 0.0;
    pub const SQUARE: f32 = 0.1;
    pub const PIECE: f32 = 1.0;
    pub const HINT: f32 = 2.0;
    pub const SUGGESTION: f32 = 2.5;
    pub const STATUS: f32 = 3.0;
}

/// Width of the dark outline around each square
pub const BORDER_WIDTH: f32 = 2.0;

/// Marker for every entity drawn by the board redraw pass
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct BoardVisual;

/// World-space centre of the square at `(row, col)`
pub fn cell_center(row: u32, col: u32) -> Vec2 {
    let half_board = BOARD_SIZE as f32 / 2.0;
    let half_square = SQUARE_SIZE as f32 / 2.0;
    Vec2::new(
        (col * SQUARE_SIZE) as f32 + half_square - half_board,
        (row * SQUARE_SIZE) as f32 + half_square - half_board,
    )
}

/// World-space centre of `square`
pub fn square_center(square: Square) -> Vec2 {
    let (row, col) = square_coords(square);
    cell_center(row, col)
}

/// Light squares are those where rank and file have different parity
pub fn is_light(row: u32, col: u32) -> bool {
    (row + col) % 2 == 1
}
