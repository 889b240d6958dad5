//! Game systems
//!
//! - `game_init` - per-game setup and teardown
//! - `game_logic` - terminal position detection
//! - `input` - click-to-move handling

pub mod game_init;
pub mod game_logic;
pub mod input;

pub use game_init::{initial_board, setup_match, teardown_match, FORCED_OPENING};
pub use game_logic::check_game_over;
pub use input::{handle_board_click, handle_board_clicks, ClickOutcome};
