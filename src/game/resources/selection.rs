//! Selection resource for tracking the selected origin square

use bevy::prelude::*;
use shakmaty::Square;

/// Currently selected square and where its piece may go
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    pub square: Option<Square>,
    pub destinations: Vec<Square>,
}

impl Selection {
    pub fn select(&mut self, square: Square, destinations: Vec<Square>) {
        self.square = Some(square);
        self.destinations = destinations;
    }

    pub fn clear(&mut self) {
        self.square = None;
        self.destinations.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.square.is_some()
    }

    pub fn is_destination(&self, square: Square) -> bool {
        self.destinations.contains(&square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_then_clear() {
        let mut selection = Selection::default();
        assert!(!selection.is_selected());

        selection.select(Square::E2, vec![Square::E3, Square::E4]);
        assert!(selection.is_selected());
        assert!(selection.is_destination(Square::E4));
        assert!(!selection.is_destination(Square::E5));

        selection.clear();
        assert_eq!(selection, Selection::default());
    }
}
