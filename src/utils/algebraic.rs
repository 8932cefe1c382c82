//! Conversions between coordinate text (`e4`) and `Square`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{PieceKind, Square};

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    Square::new(i16::from(file - b'a'), i16::from(rank - b'1'))
}

#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Lowercase promotion suffix letter, as used in long algebraic moves.
pub fn promotion_from_char(ch: char) -> ChessResult<PieceKind> {
    match ch.to_ascii_lowercase() {
        'n' => Ok(PieceKind::Knight),
        'b' => Ok(PieceKind::Bishop),
        'r' => Ok(PieceKind::Rook),
        'q' => Ok(PieceKind::Queen),
        'k' => Err(ChessError::InvalidPromotionChoice(Some(PieceKind::King))),
        'p' => Err(ChessError::InvalidPromotionChoice(Some(PieceKind::Pawn))),
        _ => Err(ChessError::InvalidAlgebraic(ch.to_string())),
    }
}
