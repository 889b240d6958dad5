//! Engine hint for the human side

use bevy::prelude::*;
use shakmaty::Square;

/// Hint computed for the position at `ply`
///
/// `squares` is `None` when the engine had nothing to offer; the entry still
/// records that this ply was asked for so the request is not repeated.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestedMove {
    pub ply: usize,
    pub squares: Option<(Square, Square)>,
}

impl SuggestedMove {
    /// Destination square to highlight, if the hint is for `ply`
    pub fn destination_at(&self, ply: usize) -> Option<Square> {
        if self.ply != ply {
            return None;
        }
        self.squares.map(|(_, to)| to)
    }
}
