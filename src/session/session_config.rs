//! Environment-driven session settings.

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;

pub const START_FEN_VAR: &str = "RULES_CHESS_START_FEN";
pub const ASCII_BOARD_VAR: &str = "RULES_CHESS_ASCII_BOARD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Position to start (and reset) from; the standard setup when `None`.
    pub start_fen: Option<String>,
    pub unicode_board: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_fen: None,
            unicode_board: true,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let start_fen = lookup(START_FEN_VAR)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());
        let ascii = lookup(ASCII_BOARD_VAR).is_some_and(|value| is_truthy(&value));

        Self {
            start_fen,
            unicode_board: !ascii,
        }
    }

    pub fn initial_state(&self) -> ChessResult<GameState> {
        match &self.start_fen {
            Some(fen) => GameState::from_fen(fen),
            None => Ok(GameState::new_game()),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
