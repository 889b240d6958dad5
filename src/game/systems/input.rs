//! Click-to-move handling
//!
//! A click either selects a piece of the side to move, completes a move to one
//! of the selected piece's legal destinations, or clears the selection.

use crate::game::ai::MatchConfig;
use crate::game::resources::{Selection, SuggestedMove};
use crate::game::rules::BoardState;
use crate::input::BoardClicked;
use bevy::prelude::*;
use shakmaty::Square;

/// What a single click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move was selected
    Selected,
    /// The selected piece moved to the clicked square
    Moved { from: Square, to: Square },
    /// The click was not a legal destination; selection dropped
    Cleared,
    /// Nothing selected and nothing selectable under the click
    Ignored,
}

/// Apply one click to the board and the selection
pub fn handle_board_click(
    board: &mut BoardState,
    selection: &mut Selection,
    square: Square,
) -> ClickOutcome {
    if let Some(from) = selection.square {
        let moved = selection.is_destination(square) && board.apply_move(from, square);
        selection.clear();
        return if moved {
            ClickOutcome::Moved { from, to: square }
        } else {
            ClickOutcome::Cleared
        };
    }

    if board.is_own_piece(square) {
        selection.select(square, board.legal_destinations(square));
        ClickOutcome::Selected
    } else {
        ClickOutcome::Ignored
    }
}

/// System that consumes [`BoardClicked`] messages on human turns
pub fn handle_board_clicks(
    mut commands: Commands,
    mut clicks: MessageReader<BoardClicked>,
    mut board: ResMut<BoardState>,
    mut selection: ResMut<Selection>,
    config: Res<MatchConfig>,
) {
    for BoardClicked(square) in clicks.read() {
        if board.is_game_over() || !config.is_human_turn(board.turn()) {
            debug!("[INPUT] Click on {} ignored, not a human turn", square);
            continue;
        }

        match handle_board_click(&mut board, &mut selection, *square) {
            ClickOutcome::Selected => debug!(
                "[INPUT] Selected {} ({} legal destinations)",
                square,
                selection.destinations.len()
            ),
            ClickOutcome::Moved { from, to } => {
                info!("[INPUT] Move {}{} played (ply {})", from, to, board.ply());
                commands.remove_resource::<SuggestedMove>();
            }
            ClickOutcome::Cleared => debug!("[INPUT] Selection cleared"),
            ClickOutcome::Ignored => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::Color;

    #[test]
    fn test_select_then_move() {
        let mut board = BoardState::new();
        let mut selection = Selection::default();

        assert_eq!(
            handle_board_click(&mut board, &mut selection, Square::E2),
            ClickOutcome::Selected
        );
        assert_eq!(selection.square, Some(Square::E2));
        assert!(selection.is_destination(Square::E3));
        assert!(selection.is_destination(Square::E4));

        assert_eq!(
            handle_board_click(&mut board, &mut selection, Square::E4),
            ClickOutcome::Moved {
                from: Square::E2,
                to: Square::E4
            }
        );
        assert!(!selection.is_selected());
        assert_eq!(board.turn(), Color::Black);
    }

    #[test]
    fn test_second_click_elsewhere_clears() {
        let mut board = BoardState::new();
        let mut selection = Selection::default();

        handle_board_click(&mut board, &mut selection, Square::E2);
        assert_eq!(
            handle_board_click(&mut board, &mut selection, Square::E5),
            ClickOutcome::Cleared
        );
        assert!(!selection.is_selected());
        assert_eq!(board.ply(), 0);
    }

    #[test]
    fn test_clicking_another_own_piece_clears() {
        let mut board = BoardState::new();
        let mut selection = Selection::default();

        handle_board_click(&mut board, &mut selection, Square::E2);
        assert_eq!(
            handle_board_click(&mut board, &mut selection, Square::D2),
            ClickOutcome::Cleared
        );
        assert_eq!(board.ply(), 0);
    }

    #[test]
    fn test_opponent_piece_and_empty_square_ignored() {
        let mut board = BoardState::new();
        let mut selection = Selection::default();

        assert_eq!(
            handle_board_click(&mut board, &mut selection, Square::E7),
            ClickOutcome::Ignored
        );
        assert_eq!(
            handle_board_click(&mut board, &mut selection, Square::E4),
            ClickOutcome::Ignored
        );
        assert!(!selection.is_selected());
    }

    #[test]
    fn test_blocked_piece_selectable_without_destinations() {
        let mut board = BoardState::new();
        let mut selection = Selection::default();

        assert_eq!(
            handle_board_click(&mut board, &mut selection, Square::A1),
            ClickOutcome::Selected
        );
        assert!(selection.destinations.is_empty());
    }
}
