//! Pointer to board-square mapping
//!
//! Window cursor coordinates have their origin in the top-left corner, while
//! rank 1 is drawn at the bottom. The row is therefore flipped:
//!
//! ```text
//! (0, 0) ──────────── x ──▶
//!   │  a8 b8 ... h8      row 7
//!   │  ...
//!   y  a1 b1 ... h1      row 0
//!   ▼
//! ```

use crate::core::{BOARD_SIZE, SQUARE_SIZE};
use crate::game::rules::square_at;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use shakmaty::Square;

/// A left click landed on a board square
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardClicked(pub Square);

/// Zero-based `(row, col)` under window pixel `(x, y)`
///
/// Row 0 is rank 1. Coordinates outside the board produce values outside
/// `0..8`; use [`square_at_cursor`] for a checked lookup.
pub fn board_coords(x: u32, y: u32) -> (i32, i32) {
    let col = (x / SQUARE_SIZE) as i32;
    let row = 7 - (y / SQUARE_SIZE) as i32;
    (row, col)
}

/// Board square under a window cursor position, if any
pub fn square_at_cursor(cursor: Vec2) -> Option<Square> {
    let size = BOARD_SIZE as f32;
    if !(0.0..size).contains(&cursor.x) || !(0.0..size).contains(&cursor.y) {
        return None;
    }

    let (row, col) = board_coords(cursor.x as u32, cursor.y as u32);
    square_at(u32::try_from(row).ok()?, u32::try_from(col).ok()?)
}

/// System that turns left-button presses over the board into [`BoardClicked`]
pub fn board_click_system(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut clicks: MessageWriter<BoardClicked>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    match square_at_cursor(cursor) {
        Some(square) => {
            trace!(
                "[POINTER] Click at ({:.1}, {:.1}) -> {}",
                cursor.x,
                cursor.y,
                square
            );
            clicks.write(BoardClicked(square));
        }
        None => trace!("[POINTER] Click outside board ignored"),
    }
}
