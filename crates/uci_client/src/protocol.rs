//! UCI command rendering and reply parsing
//!
//! Only the handful of messages needed for a single `go` request are covered:
//! `position`, `go` and `bestmove`.

use std::time::Duration;

/// Position description sent with `position startpos [moves ...]`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UciPosition {
    /// Moves played from the standard start position, in UCI notation
    pub moves: Vec<String>,
}

impl UciPosition {
    pub fn startpos() -> Self {
        Self::default()
    }

    pub fn with_moves<I, S>(moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            moves: moves.into_iter().map(Into::into).collect(),
        }
    }

    /// Render the `position` command
    pub fn command(&self) -> String {
        if self.moves.is_empty() {
            "position startpos".to_string()
        } else {
            format!("position startpos moves {}", self.moves.join(" "))
        }
    }
}

/// Search budget for one `go` request
///
/// When both bounds are set the engine stops at whichever is reached first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    pub depth: Option<u32>,
    pub movetime: Option<Duration>,
}

impl SearchLimits {
    pub fn new(depth: u32, movetime: Duration) -> Self {
        Self {
            depth: Some(depth),
            movetime: Some(movetime),
        }
    }

    /// Render the `go` command
    pub fn go_command(&self) -> String {
        let mut command = String::from("go");
        if let Some(depth) = self.depth {
            command.push_str(&format!(" depth {}", depth));
        }
        if let Some(movetime) = self.movetime {
            command.push_str(&format!(" movetime {}", movetime.as_millis()));
        }
        command
    }
}

/// Parsed `bestmove` reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BestMove {
    /// A move in UCI notation, e.g. `e2e4` or `e7e8q`
    Move(String),
    /// `bestmove (none)` / `bestmove 0000`: no legal move in the position
    None,
}

impl BestMove {
    pub fn into_option(self) -> Option<String> {
        match self {
            BestMove::Move(m) => Some(m),
            BestMove::None => None,
        }
    }
}

/// Parse a `bestmove <move> [ponder <move>]` line
///
/// Returns `None` if the line is not a well-formed `bestmove` reply.
pub fn parse_bestmove(line: &str) -> Option<BestMove> {
    let mut tokens = line.split_whitespace();
    if tokens.next()? != "bestmove" {
        return None;
    }

    let token = tokens.next()?;
    if token == "(none)" || token == "0000" {
        return Some(BestMove::None);
    }

    let well_formed =
        matches!(token.len(), 4 | 5) && token.chars().all(|c| c.is_ascii_alphanumeric());
    well_formed.then(|| BestMove::Move(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startpos_without_moves() {
        assert_eq!(UciPosition::startpos().command(), "position startpos");
    }

    #[test]
    fn test_startpos_with_moves() {
        let position = UciPosition::with_moves(["e2e4", "e7e5", "g1f3"]);
        assert_eq!(position.command(), "position startpos moves e2e4 e7e5 g1f3");
    }

    #[test]
    fn test_go_with_both_bounds() {
        let limits = SearchLimits::new(4, Duration::from_millis(2500));
        assert_eq!(limits.go_command(), "go depth 4 movetime 2500");
    }

    #[test]
    fn test_go_depth_only() {
        let limits = SearchLimits {
            depth: Some(8),
            movetime: None,
        };
        assert_eq!(limits.go_command(), "go depth 8");
    }

    #[test]
    fn test_bare_go() {
        assert_eq!(SearchLimits::default().go_command(), "go");
    }

    #[test]
    fn test_parse_bestmove_with_ponder() {
        assert_eq!(
            parse_bestmove("bestmove e2e4 ponder e7e5"),
            Some(BestMove::Move("e2e4".to_string()))
        );
    }

    #[test]
    fn test_parse_bestmove_promotion() {
        assert_eq!(
            parse_bestmove("bestmove a7a8q"),
            Some(BestMove::Move("a7a8q".to_string()))
        );
    }

    #[test]
    fn test_parse_bestmove_none() {
        assert_eq!(parse_bestmove("bestmove (none)"), Some(BestMove::None));
        assert_eq!(parse_bestmove("bestmove 0000"), Some(BestMove::None));
    }

    #[test]
    fn test_parse_rejects_other_lines() {
        assert_eq!(parse_bestmove("info depth 12 score cp 31"), None);
        assert_eq!(parse_bestmove("bestmove"), None);
        assert_eq!(parse_bestmove("bestmove e2-e4"), None);
    }
}
