//! Game Status Evaluator.

use std::fmt;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::attacked_squares;
use crate::move_generation::legal_move_generator::has_legal_move;

/// Classification of a position from the point of view of the side to move.
///
/// The color in `Check` and `Checkmate` is the side whose king is attacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Check(Color),
    Checkmate(Color),
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Check(color) => write!(f, "{color:?} is in check"),
            GameStatus::Checkmate(color) => write!(f, "{color:?} is checkmated"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Pure function of the position; recomputed on demand, never cached.
pub fn evaluate_status(game_state: &GameState) -> GameStatus {
    let side = game_state.side_to_move();
    let in_check = game_state
        .king_square(side)
        .is_some_and(|king| attacked_squares(game_state, side.opposite()).contains(king));
    let has_moves = has_legal_move(game_state);

    match (in_check, has_moves) {
        (true, false) => GameStatus::Checkmate(side),
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check(side),
        (false, true) => GameStatus::InProgress,
    }
}
