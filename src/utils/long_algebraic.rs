//! Long algebraic move text (`e2e4`, `e7e8q`) resolved against a position.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::find_legal_move;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{algebraic_to_square, promotion_from_char};

/// Split move text into origin, destination and optional promotion kind
/// without consulting any position.
pub fn parse_long_algebraic(text: &str) -> ChessResult<(Square, Square, Option<PieceKind>)> {
    let text = text.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidAlgebraic(text.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = text[4..].chars().next().map(promotion_from_char).transpose()?;

    Ok((from, to, promotion))
}

/// Resolve move text to the unique legal move it names.
pub fn long_algebraic_to_move(text: &str, game_state: &GameState) -> ChessResult<Move> {
    let (from, to, promotion) = parse_long_algebraic(text)?;
    find_legal_move(game_state, from, to, promotion)
}

#[inline]
pub fn move_to_long_algebraic(mv: &Move) -> String {
    mv.to_string()
}
