//! Game resources
//!
//! - [`Selection`] - selected square and its legal destinations
//! - [`SuggestedMove`] - engine hint for the human side
//! - [`MatchOutcome`] - result of a finished game
//!
//! The position itself lives in [`BoardState`](crate::game::rules::BoardState);
//! engine configuration lives in [`crate::game::ai`].

pub mod game_over;
pub mod selection;
pub mod suggestion;

pub use game_over::MatchOutcome;
pub use selection::Selection;
pub use suggestion::SuggestedMove;
