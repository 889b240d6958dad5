//! Board state adapter over the `shakmaty` rules engine
//!
//! `shakmaty` is the single source of truth for legality and game end. This
//! type only forwards queries, applies moves it has confirmed legal, and keeps
//! the UCI move list needed to describe the position to an engine.

use bevy::prelude::*;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Color, File, Move, Piece, Position, Rank, Role, Square};

use crate::game::error::{GameError, GameResult};

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum GameOutcome {
    WhiteWin,
    BlackWin,
    Draw,
}

impl GameOutcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::WhiteWin => Some(Color::White),
            GameOutcome::BlackWin => Some(Color::Black),
            GameOutcome::Draw => None,
        }
    }

    /// Text shown on the game-over screen
    pub fn message(self) -> &'static str {
        match self {
            GameOutcome::WhiteWin => "White wins!",
            GameOutcome::BlackWin => "Black wins!",
            GameOutcome::Draw => "Draw",
        }
    }
}

/// Current position plus the moves that led to it
#[derive(Resource, Debug, Clone, Default)]
pub struct BoardState {
    position: Chess,
    moves: Vec<String>,
}

impl BoardState {
    /// Standard starting position
    pub fn new() -> Self {
        Self::default()
    }

    /// Side to move
    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    /// Number of half-moves applied since the start position
    pub fn ply(&self) -> usize {
        self.moves.len()
    }

    /// Moves played so far, in UCI notation
    pub fn uci_moves(&self) -> &[String] {
        &self.moves
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.board().piece_at(square)
    }

    /// Every occupied square with its piece
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        let board = self.position.board();
        board
            .occupied()
            .into_iter()
            .filter_map(move |square| board.piece_at(square).map(|piece| (square, piece)))
    }

    /// Whether `square` holds a piece of the side to move
    pub fn is_own_piece(&self, square: Square) -> bool {
        self.piece_at(square)
            .is_some_and(|piece| piece.color == self.turn())
    }

    /// Distinct destination squares of all legal moves starting on `from`
    ///
    /// The four promotion choices for one pawn push collapse into one square.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        let mut destinations: Vec<Square> = Vec::new();
        for m in self.position.legal_moves() {
            let to = king_side_target(&m);
            if m.from() == Some(from) && !destinations.contains(&to) {
                destinations.push(to);
            }
        }
        destinations
    }

    pub fn is_game_over(&self) -> bool {
        self.position.is_game_over()
    }

    /// Result of the game, or `None` while it is still running
    pub fn result(&self) -> Option<GameOutcome> {
        if self.position.is_checkmate() {
            Some(match self.turn() {
                Color::White => GameOutcome::BlackWin,
                Color::Black => GameOutcome::WhiteWin,
            })
        } else if self.position.is_game_over() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Play the legal move from `from` to `to`, if there is one
    ///
    /// Returns `false` and leaves the position untouched otherwise. Pawns
    /// reaching the last rank are promoted to a queen.
    pub fn apply_move(&mut self, from: Square, to: Square) -> bool {
        let candidate = self.position.legal_moves().into_iter().find(|m| {
            m.from() == Some(from)
                && king_side_target(m) == to
                && matches!(m.promotion(), None | Some(Role::Queen))
        });

        match candidate {
            Some(m) => {
                self.play(m);
                true
            }
            None => false,
        }
    }

    /// Play a move given in UCI notation (as produced by an engine)
    ///
    /// The move is checked against the rules engine before it is applied.
    pub fn apply_uci(&mut self, uci: &str) -> GameResult<()> {
        let m = self.parse_legal(uci)?;
        self.play(m);
        Ok(())
    }

    /// Origin and destination of a legal UCI move, without playing it
    pub fn uci_squares(&self, uci: &str) -> GameResult<(Square, Square)> {
        let m = self.parse_legal(uci)?;
        let from = m.from().ok_or_else(|| GameError::InvalidMove {
            message: format!("'{}' has no origin square", uci),
        })?;
        Ok((from, king_side_target(&m)))
    }

    fn parse_legal(&self, uci: &str) -> GameResult<Move> {
        let parsed: UciMove = uci.parse().map_err(|_| GameError::InvalidMove {
            message: format!("'{}' is not UCI notation", uci),
        })?;
        parsed
            .to_move(&self.position)
            .map_err(|_| GameError::InvalidMove {
                message: format!("'{}' is not legal in the current position", uci),
            })
    }

    fn play(&mut self, m: Move) {
        self.moves.push(m.to_uci(CastlingMode::Standard).to_string());
        self.position.play_unchecked(m);
    }
}

/// Square a move lands on as seen by the player
///
/// `Move::to()` names the rook for castling; the king's square (g1, c1, g8, c8)
/// is what gets clicked and highlighted.
fn king_side_target(m: &Move) -> Square {
    match m.to_uci(CastlingMode::Standard) {
        UciMove::Normal { to, .. } => to,
        _ => m.to(),
    }
}

/// Square at a zero-based `(row, col)`; row 0 is rank 1, col 0 is file a
pub fn square_at(row: u32, col: u32) -> Option<Square> {
    (row < 8 && col < 8).then(|| Square::from_coords(File::new(col), Rank::new(row)))
}

/// Zero-based `(row, col)` of `square`; inverse of [`square_at`]
pub fn square_coords(square: Square) -> (u32, u32) {
    (square.rank() as u32, square.file() as u32)
}
